//! Error types for menu construction and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or driving the menu overlay
///
/// Everything except `DoubleWrite` happens at construction time and aborts
/// startup.
#[derive(Debug, Error)]
pub enum MenuError {
    /// An image asset is missing or could not be decoded
    #[error("failed to load image {path}: {reason}")]
    AssetLoad { path: PathBuf, reason: String },

    /// SDL2 refused a drawing or texture operation
    #[error("render error: {0}")]
    Render(String),

    /// A menu state name that does not exist
    #[error("unknown menu state '{0}'")]
    UnknownState(String),

    /// A key name SDL2 does not recognise
    #[error("unknown key name '{0}'")]
    UnknownKey(String),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The game state was written twice within one tick
    #[error("game state already set to {previous:?} this tick (rejected {rejected:?})")]
    DoubleWrite {
        previous: crate::game_state::GameState,
        rejected: crate::game_state::GameState,
    },
}

impl From<MenuError> for String {
    fn from(error: MenuError) -> Self {
        error.to_string()
    }
}
