//! Error type shared by the page collaborators.

use thiserror::Error;

/// Errors raised while performing a hotkey action.
///
/// None of these ever reach the user: the dispatcher logs them and moves on.
#[derive(Debug, Error)]
pub enum HotkeyError {
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("UI component error: {0}")]
    Component(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

/// Result type for hotkey operations.
pub type HotkeyResult<T> = Result<T, HotkeyError>;
