//! Screen-Space Menu GUI
//!
//! Widgets for the menu overlay. Everything here renders in menu-local
//! coordinates onto the menu's offscreen surface; the menu then blits that
//! surface onto the window.
//!
//! # Available Components
//!
//! - [`button::Button`] - image-backed button with idle/hover/pressed states
//! - [`label::Label`] - text rendered once and copied every frame
//! - [`Menu`] - main/instructions/paused screens of labels and buttons
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{Menu, MenuIntent};
//!
//! // Build once at startup
//! let mut menu = Menu::build(&mut canvas, &texture_creator, &config, &bindings)?;
//!
//! // Each frame
//! for intent in menu.update(&input, &bindings) {
//!     // apply EnterGame / ResumeGame / Terminate
//! }
//! menu.draw(&mut canvas)?;
//! menu.render(&mut canvas)?;
//! ```

pub mod button;
pub mod label;
pub mod menu;

pub use menu::{Menu, MenuIntent};
