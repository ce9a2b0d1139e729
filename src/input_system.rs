use crate::error::MenuError;
use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Logical menu actions a key can be bound to
///
/// The menu never looks at raw key codes. Keys are resolved to one of these
/// through [`KeyBindings`], and what an action means depends on the active
/// menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Context dependent: quit from main, back from instructions, resume from pause
    Escape,
    /// Open the instructions screen
    Instructions,
    /// Play from main, resume from pause
    Confirm,
    /// Leave the instructions screen
    Back,
    /// Return to the main menu from the pause screen
    MainMenu,
}

/// Everything the menu needs to know about one frame of input
///
/// Built once per frame by [`InputSystem::poll`] and handed to the menu by
/// reference, so no widget ever polls SDL2 on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Cursor position in window pixels
    pub cursor: (i32, i32),
    /// Left mouse button held at the end of the frame
    pub primary_down: bool,
    /// Keys pressed this frame, in event order (repeats excluded)
    pub keys: Vec<Keycode>,
    /// The window close button was clicked
    pub quit_requested: bool,
}

#[cfg(test)]
impl FrameInput {
    /// Input with the cursor at `cursor` and nothing else happening
    pub fn at(cursor: (i32, i32)) -> Self {
        FrameInput {
            cursor,
            ..Default::default()
        }
    }

    pub fn with_primary_down(mut self, down: bool) -> Self {
        self.primary_down = down;
        self
    }

    pub fn with_key(mut self, key: Keycode) -> Self {
        self.keys.push(key);
        self
    }
}

/// Turns the SDL2 event queue into one [`FrameInput`] per frame
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains all pending events and samples the mouse
    pub fn poll(&self, event_pump: &mut EventPump) -> FrameInput {
        let mut input = FrameInput::default();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    input.quit_requested = true;
                }
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    input.keys.push(key);
                }
                _ => {}
            }
        }

        let mouse = event_pump.mouse_state();
        input.cursor = (mouse.x(), mouse.y());
        input.primary_down = mouse.left();

        input
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Mapping from logical menu action to key
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub escape: Keycode,
    pub instructions: Keycode,
    pub confirm: Keycode,
    pub back: Keycode,
    pub main_menu: Keycode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            escape: Keycode::Escape,
            instructions: Keycode::I,
            confirm: Keycode::Return,
            back: Keycode::Backspace,
            main_menu: Keycode::M,
        }
    }
}

impl KeyBindings {
    /// Resolves a key to its action
    ///
    /// When one key is bound to several actions the first match in
    /// declaration order wins.
    pub fn action_for(&self, key: Keycode) -> Option<MenuAction> {
        [
            (self.escape, MenuAction::Escape),
            (self.instructions, MenuAction::Instructions),
            (self.confirm, MenuAction::Confirm),
            (self.back, MenuAction::Back),
            (self.main_menu, MenuAction::MainMenu),
        ]
        .into_iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, action)| action)
    }

    /// Loads bindings from a JSON file of SDL2 key names
    ///
    /// Actions left out of the file keep their default key.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MenuError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: KeyBindingsFile =
            serde_json::from_str(&content).map_err(|source| MenuError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        let bindings = file.into_bindings()?;
        info!("Loaded key bindings from {}", path.display());
        Ok(bindings)
    }
}

/// On-disk form of [`KeyBindings`]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindingsFile {
    pub escape: Option<String>,
    pub instructions: Option<String>,
    pub confirm: Option<String>,
    pub back: Option<String>,
    pub main_menu: Option<String>,
}

impl KeyBindingsFile {
    pub fn into_bindings(self) -> Result<KeyBindings, MenuError> {
        let defaults = KeyBindings::default();
        Ok(KeyBindings {
            escape: resolve_key(self.escape, defaults.escape)?,
            instructions: resolve_key(self.instructions, defaults.instructions)?,
            confirm: resolve_key(self.confirm, defaults.confirm)?,
            back: resolve_key(self.back, defaults.back)?,
            main_menu: resolve_key(self.main_menu, defaults.main_menu)?,
        })
    }
}

fn resolve_key(name: Option<String>, fallback: Keycode) -> Result<Keycode, MenuError> {
    match name {
        None => Ok(fallback),
        Some(name) => key_from_name(&name).ok_or(MenuError::UnknownKey(name)),
    }
}

/// Parses a key name, case-insensitively
///
/// SDL2 only resolves most names once its keyboard subsystem is up, so the
/// keys a menu is likely to use are matched here before asking SDL2.
fn key_from_name(name: &str) -> Option<Keycode> {
    let named = match name.to_ascii_lowercase().as_str() {
        "escape" | "esc" => Some(Keycode::Escape),
        "return" | "enter" => Some(Keycode::Return),
        "backspace" => Some(Keycode::Backspace),
        "space" => Some(Keycode::Space),
        "tab" => Some(Keycode::Tab),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    // Letter and digit keycodes are their lowercase ASCII values
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphanumeric() {
            return Keycode::from_i32(c.to_ascii_lowercase() as i32);
        }
    }

    Keycode::from_name(name)
}
