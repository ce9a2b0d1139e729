//! Image-backed Button Component
//!
//! A button carries one image per interaction state and is anchored by its
//! center. Each frame it is updated with the cursor position and the primary
//! mouse button, then rendered.
//!
//! # State Machine
//!
//! - cursor outside → `Idle` (always, whatever came before)
//! - cursor inside, button held → `Pressed`
//! - cursor inside, button up → `Hover`, and if the previous state was
//!   `Pressed` the bound intent fires
//!
//! Releasing outside the button never fires: dragging off cancels the click.

use super::label::centered_rect;
use super::menu::MenuIntent;
use crate::error::MenuError;
use log::info;
use sdl2::image::LoadTexture;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use std::path::Path;

/// Anything with a pixel size: textures at runtime, plain sizes in tests
pub trait ImageSize {
    fn size(&self) -> (u32, u32);
}

impl ImageSize for Texture<'_> {
    fn size(&self) -> (u32, u32) {
        let query = self.query();
        (query.width, query.height)
    }
}

/// Visual/interaction state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Hover,
    Pressed,
}

impl ButtonState {
    fn index(self) -> usize {
        match self {
            ButtonState::Idle => 0,
            ButtonState::Hover => 1,
            ButtonState::Pressed => 2,
        }
    }

    /// Image file name expected in a button's asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            ButtonState::Idle => "idle.png",
            ButtonState::Hover => "hover.png",
            ButtonState::Pressed => "pressed.png",
        }
    }
}

/// One image per [`ButtonState`]
#[derive(Debug)]
pub struct StateImages<T> {
    images: [T; 3],
}

impl<T> StateImages<T> {
    pub fn new(idle: T, hover: T, pressed: T) -> Self {
        StateImages {
            images: [idle, hover, pressed],
        }
    }

    pub fn get(&self, state: ButtonState) -> &T {
        &self.images[state.index()]
    }
}

impl<'a> StateImages<Texture<'a>> {
    /// Loads `idle.png`, `hover.png` and `pressed.png` from `dir`
    ///
    /// Fails on the first missing or unreadable image.
    pub fn load<C>(texture_creator: &'a TextureCreator<C>, dir: impl AsRef<Path>) -> Result<Self, MenuError> {
        let dir = dir.as_ref();
        let load = |state: ButtonState| {
            let path = dir.join(state.file_name());
            texture_creator
                .load_texture(&path)
                .map_err(|reason| MenuError::AssetLoad { path, reason })
        };

        let images = StateImages::new(
            load(ButtonState::Idle)?,
            load(ButtonState::Hover)?,
            load(ButtonState::Pressed)?,
        );
        info!("Loaded button images from {}", dir.display());
        Ok(images)
    }
}

/// A clickable button that emits a [`MenuIntent`] when clicked
#[derive(Debug)]
pub struct Button<T> {
    images: StateImages<T>,
    position: Point,
    intent: MenuIntent,
    state: ButtonState,
    rect: Rect,
}

impl<T: ImageSize> Button<T> {
    /// Creates an idle button centered on `position`
    pub fn new(images: StateImages<T>, position: Point, intent: MenuIntent) -> Self {
        let (width, height) = images.get(ButtonState::Idle).size();
        Button {
            images,
            position,
            intent,
            state: ButtonState::Idle,
            rect: centered_rect(position, width, height),
        }
    }

    /// Advances the state machine by one frame
    ///
    /// Returns the bound intent on the frame the button is released while
    /// the cursor is still over it.
    pub fn update(&mut self, cursor: Point, primary_down: bool) -> Option<MenuIntent> {
        let mut fired = None;

        self.state = if self.rect.contains_point(cursor) {
            if primary_down {
                ButtonState::Pressed
            } else {
                if self.state == ButtonState::Pressed {
                    fired = Some(self.intent);
                }
                ButtonState::Hover
            }
        } else {
            ButtonState::Idle
        };

        // Variants may differ in size, so re-pin the center every frame
        let (width, height) = self.images.get(self.state).size();
        self.rect = centered_rect(self.position, width, height);

        fired
    }

    /// Drops back to idle without firing
    pub fn reset(&mut self) {
        self.state = ButtonState::Idle;
        let (width, height) = self.images.get(self.state).size();
        self.rect = centered_rect(self.position, width, height);
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Button<Texture<'_>> {
    /// Copies the current state's image onto `canvas`
    pub fn render<T: RenderTarget>(&self, canvas: &mut Canvas<T>) -> Result<(), String> {
        canvas.copy(self.images.get(self.state()), None, self.rect())
    }
}
