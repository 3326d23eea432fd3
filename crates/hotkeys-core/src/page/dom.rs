//! Direct DOM manipulation: the manual panel fallback and the live region.

use super::{Announcer, PanelKind, PanelToggle, LIVE_REGION_ID};
use crate::error::{HotkeyError, HotkeyResult};
use std::cell::RefCell;

/// Class marking a shown panel.
pub const SHOWN_CLASS: &str = "show";
/// Body class standing in for the offcanvas backdrop.
pub const BACKDROP_CLASS: &str = "offcanvas-backdrop";
/// Class hiding the live region visually.
pub const VISUALLY_HIDDEN_CLASS: &str = "visually-hidden";

/// Element-level document operations.
pub trait Dom {
    type Element: Clone;

    fn body(&self) -> Option<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn create_element(&self, tag: &str) -> HotkeyResult<Self::Element>;

    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> HotkeyResult<()>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> HotkeyResult<()>;

    fn remove_attribute(&self, element: &Self::Element, name: &str) -> HotkeyResult<()>;

    fn add_class(&self, element: &Self::Element, class: &str) -> HotkeyResult<()>;

    /// Set an inline style property. A no-op on elements without inline style.
    fn set_style(&self, element: &Self::Element, property: &str, value: &str) -> HotkeyResult<()>;

    fn set_text(&self, element: &Self::Element, text: &str);
}

/// Shows panels by editing classes and attributes directly.
pub struct ManualToggle<D> {
    dom: D,
}

impl<D: Dom> ManualToggle<D> {
    pub fn new(dom: D) -> Self {
        Self { dom }
    }
}

impl<D: Dom> PanelToggle<D::Element> for ManualToggle<D> {
    fn show(&self, element: &D::Element, kind: PanelKind) -> HotkeyResult<()> {
        self.dom.add_class(element, SHOWN_CLASS)?;
        self.dom.set_style(element, "display", "block")?;

        if kind == PanelKind::Offcanvas {
            self.dom.remove_attribute(element, "aria-hidden")?;
            if let Some(body) = self.dom.body() {
                self.dom.add_class(&body, BACKDROP_CLASS)?;
                self.dom.add_class(&body, SHOWN_CLASS)?;
            }
        }
        Ok(())
    }
}

/// Visually hidden `aria-live` region, created on first use and kept for
/// the page's lifetime.
pub struct LiveRegion<D: Dom> {
    dom: D,
    node: RefCell<Option<D::Element>>,
}

impl<D: Dom> LiveRegion<D> {
    pub fn new(dom: D) -> Self {
        Self {
            dom,
            node: RefCell::new(None),
        }
    }

    fn node(&self) -> HotkeyResult<D::Element> {
        if let Some(node) = self.node.borrow().as_ref() {
            return Ok(node.clone());
        }

        let node = match self.dom.element_by_id(LIVE_REGION_ID) {
            Some(existing) => existing,
            None => {
                let body = self
                    .dom
                    .body()
                    .ok_or_else(|| HotkeyError::Dom("No body".to_string()))?;
                let node = self.dom.create_element("div")?;
                self.dom.set_attribute(&node, "id", LIVE_REGION_ID)?;
                self.dom.set_attribute(&node, "aria-live", "polite")?;
                self.dom.add_class(&node, VISUALLY_HIDDEN_CLASS)?;
                self.dom.append_child(&body, &node)?;
                node
            }
        };

        *self.node.borrow_mut() = Some(node.clone());
        Ok(node)
    }
}

impl<D: Dom> Announcer for LiveRegion<D> {
    fn announce(&self, message: &str) -> HotkeyResult<()> {
        let node = self.node()?;
        self.dom.set_text(&node, message);
        Ok(())
    }
}
