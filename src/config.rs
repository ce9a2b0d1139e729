//! Startup configuration
//!
//! Menu layout and colours come from `assets/config/menu.json`, key bindings
//! from a per-user file or `assets/config/key_bindings.json`. Every file is
//! optional; a file that exists but does not parse aborts startup.

use crate::error::MenuError;
use crate::input_system::KeyBindings;
use log::{info, warn};
use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MENU_CONFIG_PATH: &str = "assets/config/menu.json";
pub const KEY_BINDINGS_PATH: &str = "assets/config/key_bindings.json";

/// Largest accepted font scale; a 5x7 glyph at this scale is 80x112 pixels
pub const MAX_TEXT_SCALE: u32 = 16;

/// Position and size of the menu surface on the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectConfig {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    pub window_width: u32,
    pub window_height: u32,

    /// Where the menu surface is blitted
    pub menu_rect: RectConfig,

    pub background_color: [u8; 3],
    pub text_color: [u8; 3],

    /// Bitmap font scale for labels
    pub text_scale: u32,

    /// Menu background image; `null` fills with `background_color` instead
    pub background_image: Option<PathBuf>,

    /// Holds one directory per button, each with idle/hover/pressed images
    pub button_dir: PathBuf,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            window_width: 640,
            window_height: 480,
            menu_rect: RectConfig {
                x: 170,
                y: 20,
                width: 300,
                height: 440,
            },
            background_color: [0, 0, 0],
            text_color: [240, 240, 240],
            text_scale: 2,
            background_image: Some(PathBuf::from("assets/images/menu_background.png")),
            button_dir: PathBuf::from("assets/buttons"),
        }
    }
}

impl MenuConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MenuError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: MenuConfig =
            serde_json::from_str(&content).map_err(|source| MenuError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.clamp_text_scale();
        Ok(config)
    }

    /// Pulls `text_scale` into `1..=MAX_TEXT_SCALE`
    fn clamp_text_scale(&mut self) {
        let clamped = self.text_scale.clamp(1, MAX_TEXT_SCALE);
        if clamped != self.text_scale {
            warn!("text_scale {} out of range, using {}", self.text_scale, clamped);
            self.text_scale = clamped;
        }
    }

    /// Loads `path` if it exists, otherwise the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No menu config at {}, using defaults", path.display());
            return Ok(MenuConfig::default());
        }
        let config = Self::load_from_file(path)?;
        info!("Loaded menu config from {}", path.display());
        Ok(config)
    }

    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background_color;
        Color::RGB(r, g, b)
    }

    pub fn text_color(&self) -> Color {
        let [r, g, b] = self.text_color;
        Color::RGB(r, g, b)
    }
}

/// Per-user key bindings file, if the platform has a config directory
pub fn user_key_bindings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("menu_overlay").join("key_bindings.json"))
}

/// Picks the first bindings file that exists among `candidates`
///
/// Falls back to the default bindings when none exist.
pub fn load_key_bindings(candidates: &[PathBuf]) -> Result<KeyBindings, MenuError> {
    match candidates.iter().find(|path| path.exists()) {
        Some(path) => KeyBindings::load_from_file(path),
        None => {
            info!("No key bindings file found, using defaults");
            Ok(KeyBindings::default())
        }
    }
}

/// Bindings file search order: per-user file first, then the bundled one
pub fn key_bindings_candidates() -> Vec<PathBuf> {
    user_key_bindings_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(KEY_BINDINGS_PATH)))
        .collect()
}
