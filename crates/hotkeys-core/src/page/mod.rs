//! Page collaborators the dispatcher drives.
//!
//! The dispatcher never touches the DOM directly. It goes through these
//! traits, implemented by web-sys adapters in the browser and by
//! [`MemoryPage`] natively.

mod dom;
mod memory;
mod memory_dom;
mod toggle;

pub use dom::{Dom, LiveRegion, ManualToggle, BACKDROP_CLASS, SHOWN_CLASS, VISUALLY_HIDDEN_CLASS};
pub use memory::{MemoryElement, MemoryPage, PageState};
pub use memory_dom::{MemoryDom, MemoryNode, NodeId};
pub use toggle::{PanelKind, PanelToggle, PreferredToggle};

use crate::error::HotkeyResult;

/// Candidates for the search box, in priority order.
pub const SEARCH_INPUT_SELECTOR: &str = r#"#searchInput, [name="q"], [type="search"]"#;
/// Offcanvas filter panel.
pub const FILTER_PANEL_SELECTOR: &str =
    r#"#filters.offcanvas, .offcanvas#filters, [data-filters-panel="1"]"#;
/// Id of the help overlay.
pub const HELP_OVERLAY_ID: &str = "hotkeysModal";
/// Currently open offcanvas or modal.
pub const OPEN_OVERLAY_SELECTOR: &str = ".offcanvas.show, .modal.show";
/// Dismiss control inside an open overlay.
pub const DISMISS_CONTROL_SELECTOR: &str =
    r#"[data-bs-dismiss="offcanvas"], [data-bs-dismiss="modal"], .btn-close"#;
/// Id of the screen-reader live region.
pub const LIVE_REGION_ID: &str = "hotkeys-live";
/// Container filled with the shortcut cheat sheet.
pub const HOTKEY_LIST_SELECTOR: &str = "[data-hotkeys-list]";

/// How to reload the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadMode {
    Normal,
    /// Bypass the HTTP cache.
    Forced,
}

/// DOM and location operations used by hotkey actions.
pub trait Page {
    /// Handle to a page element.
    type Element;

    fn navigate(&self, url: &str) -> HotkeyResult<()>;

    fn reload(&self, mode: ReloadMode) -> HotkeyResult<()>;

    /// First element matching [`SEARCH_INPUT_SELECTOR`].
    fn search_input(&self) -> Option<Self::Element>;

    /// Focus an element and select its text if it supports selection.
    fn focus_and_select(&self, element: &Self::Element) -> HotkeyResult<()>;

    /// Element matching [`FILTER_PANEL_SELECTOR`].
    fn filter_panel(&self) -> Option<Self::Element>;

    /// Element with id [`HELP_OVERLAY_ID`].
    fn help_overlay(&self) -> Option<Self::Element>;

    /// Element matching [`OPEN_OVERLAY_SELECTOR`].
    fn open_overlay(&self) -> Option<Self::Element>;

    /// Click the dismiss control inside `overlay`. Returns `false` if there is none.
    fn dismiss(&self, overlay: &Self::Element) -> HotkeyResult<bool>;

    /// Flip the dark theme class on the document root. Returns the new state.
    fn toggle_theme(&self) -> HotkeyResult<bool>;
}

/// Screen-reader announcements.
pub trait Announcer {
    fn announce(&self, message: &str) -> HotkeyResult<()>;
}
