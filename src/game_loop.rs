//! One tick of the outer loop's game-state handling
//!
//! While the flag says `InMenu` the menu gets the frame's input and its
//! external intents are applied here. While it says `InGame` the menu is left
//! alone and only the pause key is watched.

use crate::game_state::{GameState, SharedGameState};
use crate::gui::button::ImageSize;
use crate::gui::{Menu, MenuIntent};
use crate::input_system::{FrameInput, KeyBindings};
use log::{debug, info};

/// Whether the outer loop keeps going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Opens a tick and applies one frame of input to the menu and the flag
pub fn step<T: ImageSize>(
    menu: &mut Menu<T>,
    game_state: &SharedGameState,
    input: &FrameInput,
    bindings: &KeyBindings,
) -> LoopControl {
    game_state.begin_tick();
    if input.quit_requested {
        info!("Window closed");
        return LoopControl::Exit;
    }

    match game_state.get() {
        GameState::InMenu => {
            for intent in menu.update(input, bindings) {
                match intent {
                    MenuIntent::EnterGame | MenuIntent::ResumeGame => {
                        info!("Leaving {} menu for the game", menu.state());
                        request(game_state, GameState::InGame);
                    }
                    MenuIntent::Terminate => {
                        info!("Quit from main menu");
                        return LoopControl::Exit;
                    }
                    MenuIntent::EnterInstructions | MenuIntent::ReturnToMain => {
                        unreachable!("menu applies screen changes itself")
                    }
                }
            }
        }
        GameState::InGame => {
            if input.keys.contains(&bindings.escape) {
                menu.pause();
                request(game_state, GameState::InMenu);
            }
        }
    }

    LoopControl::Continue
}

/// Writes `state` unless the flag already holds it
///
/// Play and Return in one frame both ask for the game; the repeat is dropped.
fn request(game_state: &SharedGameState, state: GameState) {
    if game_state.get() == state {
        debug!("Game state already {:?}, request dropped", state);
        return;
    }
    if let Err(e) = game_state.set(state) {
        debug!("{}", e);
    }
}
