//! Storefront Hotkeys Core Library
//!
//! Platform-agnostic context, key model and dispatch logic for the storefront
//! keyboard shortcuts. Browser bindings live in `hotkeys-app`.

pub mod action;
pub mod context;
pub mod csrf;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod page;
pub mod theme;

pub use action::{Action, NavTarget};
pub use context::{Context, NavTargets, Role};
pub use dispatch::{select, Dispatch, Dispatcher};
pub use error::{HotkeyError, HotkeyResult};
pub use input::{KeyEvent, Modifiers, TargetKind};
pub use page::{
    Announcer, Dom, LiveRegion, ManualToggle, MemoryDom, MemoryElement, MemoryPage, Page,
    PanelKind, PanelToggle, PreferredToggle, ReloadMode,
};
pub use theme::{ThemeNotifier, ThemeRequest};
