//! Shared game-state flag
//!
//! The outer loop and the menu both care whether the player is in a menu or
//! in the game. The flag lives in one cell behind a cloneable handle, and at
//! most one write is accepted per tick. The outer loop opens each tick with
//! [`SharedGameState::begin_tick`] and is the only reader that branches on
//! the value.

use crate::error::MenuError;
use log::{debug, warn};
use std::cell::Cell;
use std::rc::Rc;

/// Coarse game loop mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InMenu,
    InGame,
}

#[derive(Debug)]
struct Slot {
    value: Cell<GameState>,
    written_this_tick: Cell<bool>,
}

/// Handle to the process-wide game-state cell
#[derive(Debug, Clone)]
pub struct SharedGameState {
    slot: Rc<Slot>,
}

impl SharedGameState {
    pub fn new(initial: GameState) -> Self {
        SharedGameState {
            slot: Rc::new(Slot {
                value: Cell::new(initial),
                written_this_tick: Cell::new(false),
            }),
        }
    }

    pub fn get(&self) -> GameState {
        self.slot.value.get()
    }

    /// Opens a new tick, allowing one write
    pub fn begin_tick(&self) {
        self.slot.written_this_tick.set(false);
    }

    /// Writes the flag, rejecting a second write within the same tick
    pub fn set(&self, state: GameState) -> Result<(), MenuError> {
        if self.slot.written_this_tick.get() {
            let previous = self.get();
            warn!("Rejected game state write {:?}, already set to {:?} this tick", state, previous);
            return Err(MenuError::DoubleWrite {
                previous,
                rejected: state,
            });
        }

        if self.get() != state {
            debug!("Game state {:?} -> {:?}", self.get(), state);
        }
        self.slot.value.set(state);
        self.slot.written_this_tick.set(true);
        Ok(())
    }
}

impl Default for SharedGameState {
    fn default() -> Self {
        Self::new(GameState::InMenu)
    }
}

/// Decides between a full-screen repaint and a menu-only repaint
///
/// The whole screen is repainted on the first frame after the game state
/// changes; every other menu frame only the menu rectangle is recomposited.
#[derive(Debug, Default)]
pub struct RepaintTracker {
    last: Option<GameState>,
}

impl RepaintTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when `current` differs from the previous frame's state
    pub fn needs_full_repaint(&mut self, current: GameState) -> bool {
        let changed = self.last != Some(current);
        self.last = Some(current);
        changed
    }
}
