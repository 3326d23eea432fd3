//! In-memory page implementation.

use super::{Announcer, Page, PanelKind, PanelToggle, ReloadMode};
use crate::error::{HotkeyError, HotkeyResult};
use crate::theme::ThemeNotifier;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Elements a [`MemoryPage`] can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryElement {
    SearchInput,
    FilterPanel,
    HelpOverlay,
    /// An open offcanvas or modal.
    OpenOverlay,
}

/// Observable state of a [`MemoryPage`].
#[derive(Debug, Default)]
pub struct PageState {
    pub has_search_input: bool,
    pub has_filter_panel: bool,
    pub has_help_overlay: bool,
    pub has_open_overlay: bool,
    /// Whether the open overlay contains a dismiss control.
    pub has_dismiss_control: bool,

    /// URLs navigated to, in order.
    pub navigations: Vec<String>,
    pub reloads: Vec<ReloadMode>,
    pub focused: Option<MemoryElement>,
    pub dismissals: usize,
    pub shown: Vec<(MemoryElement, PanelKind)>,
    pub theme_dark: bool,
    pub announcements: Vec<String>,
    /// Endpoints notified about theme changes.
    pub notifications: Vec<String>,
}

impl PageState {
    /// The last navigated URL.
    pub fn location(&self) -> Option<&str> {
        self.navigations.last().map(String::as_str)
    }
}

/// In-memory page for tests and headless use.
///
/// Clones share state, so one page can serve as every collaborator at once.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    state: Rc<RefCell<PageState>>,
}

impl MemoryPage {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_input(self) -> Self {
        self.state.borrow_mut().has_search_input = true;
        self
    }

    pub fn with_filter_panel(self) -> Self {
        self.state.borrow_mut().has_filter_panel = true;
        self
    }

    pub fn with_help_overlay(self) -> Self {
        self.state.borrow_mut().has_help_overlay = true;
        self
    }

    /// Add an open overlay, optionally with a dismiss control.
    pub fn with_open_overlay(self, dismissible: bool) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.has_open_overlay = true;
            state.has_dismiss_control = dismissible;
        }
        self
    }

    /// Borrow the current state.
    pub fn state(&self) -> Ref<'_, PageState> {
        self.state.borrow()
    }

    fn find(&self, present: bool, element: MemoryElement) -> Option<MemoryElement> {
        present.then_some(element)
    }
}

impl Page for MemoryPage {
    type Element = MemoryElement;

    fn navigate(&self, url: &str) -> HotkeyResult<()> {
        self.state.borrow_mut().navigations.push(url.to_string());
        Ok(())
    }

    fn reload(&self, mode: ReloadMode) -> HotkeyResult<()> {
        self.state.borrow_mut().reloads.push(mode);
        Ok(())
    }

    fn search_input(&self) -> Option<MemoryElement> {
        self.find(self.state().has_search_input, MemoryElement::SearchInput)
    }

    fn focus_and_select(&self, element: &MemoryElement) -> HotkeyResult<()> {
        self.state.borrow_mut().focused = Some(*element);
        Ok(())
    }

    fn filter_panel(&self) -> Option<MemoryElement> {
        self.find(self.state().has_filter_panel, MemoryElement::FilterPanel)
    }

    fn help_overlay(&self) -> Option<MemoryElement> {
        self.find(self.state().has_help_overlay, MemoryElement::HelpOverlay)
    }

    fn open_overlay(&self) -> Option<MemoryElement> {
        self.find(self.state().has_open_overlay, MemoryElement::OpenOverlay)
    }

    fn dismiss(&self, overlay: &MemoryElement) -> HotkeyResult<bool> {
        let mut state = self.state.borrow_mut();
        if *overlay != MemoryElement::OpenOverlay || !state.has_open_overlay {
            return Err(HotkeyError::Dom(format!("{:?} is not an open overlay", overlay)));
        }
        if !state.has_dismiss_control {
            return Ok(false);
        }
        state.has_open_overlay = false;
        state.dismissals += 1;
        Ok(true)
    }

    fn toggle_theme(&self) -> HotkeyResult<bool> {
        let mut state = self.state.borrow_mut();
        state.theme_dark = !state.theme_dark;
        Ok(state.theme_dark)
    }
}

impl PanelToggle<MemoryElement> for MemoryPage {
    fn show(&self, element: &MemoryElement, kind: PanelKind) -> HotkeyResult<()> {
        self.state.borrow_mut().shown.push((*element, kind));
        Ok(())
    }
}

impl Announcer for MemoryPage {
    fn announce(&self, message: &str) -> HotkeyResult<()> {
        self.state.borrow_mut().announcements.push(message.to_string());
        Ok(())
    }
}

impl ThemeNotifier for MemoryPage {
    fn notify(&self, endpoint: &str) {
        self.state.borrow_mut().notifications.push(endpoint.to_string());
    }
}
