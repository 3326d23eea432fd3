//! Keyboard event model.

use serde::{Deserialize, Serialize};

/// Modifier keys state.
///
/// Only `shift` takes part in shortcut selection; the rest are kept for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Kind of element a key event originated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Input,
    TextArea,
    Select,
    ContentEditable,
    #[default]
    Other,
}

impl TargetKind {
    /// Classify an element from its tag name and content-editable flag.
    pub fn classify(tag_name: &str, content_editable: bool) -> Self {
        if tag_name.eq_ignore_ascii_case("input") {
            TargetKind::Input
        } else if tag_name.eq_ignore_ascii_case("textarea") {
            TargetKind::TextArea
        } else if tag_name.eq_ignore_ascii_case("select") {
            TargetKind::Select
        } else if content_editable {
            TargetKind::ContentEditable
        } else {
            TargetKind::Other
        }
    }

    /// Whether the element receives text input.
    pub fn is_editable(self) -> bool {
        !matches!(self, TargetKind::Other)
    }
}

/// A single key-down event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Logical key as reported by the browser (`"g"`, `"?"`, `"Escape"`).
    pub key: String,
    /// Physical key code (`"KeyG"`). Not used for selection.
    pub code: String,
    pub modifiers: Modifiers,
    pub target: TargetKind,
}

impl KeyEvent {
    /// Key event on a non-editable target with no modifiers.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn on(mut self, target: TargetKind) -> Self {
        self.target = target;
        self
    }
}
