//! Storefront Hotkeys Application
//!
//! Browser shell wiring the core dispatcher to the live DOM, plus the
//! shortcut registry shared with the native cheat-sheet tool.

mod config;
mod shortcuts;

pub use config::{load_context, ConfigError};
pub use shortcuts::{Shortcut, ShortcutRegistry};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
