//! Showing panels and modals.

use crate::error::HotkeyResult;

/// Kind of UI component being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Side panel (filters).
    Offcanvas,
    /// Dialog (help overlay).
    Modal,
}

impl PanelKind {
    /// Component class name in the UI library (`bootstrap.Offcanvas`).
    pub fn component_name(self) -> &'static str {
        match self {
            PanelKind::Offcanvas => "Offcanvas",
            PanelKind::Modal => "Modal",
        }
    }
}

/// Capability to show a panel element.
pub trait PanelToggle<E> {
    /// Whether this toggle can be used right now.
    fn is_available(&self, _kind: PanelKind) -> bool {
        true
    }

    fn show(&self, element: &E, kind: PanelKind) -> HotkeyResult<()>;
}

/// Uses `rich` when it is available and falls back to `fallback` otherwise,
/// or when `rich` fails.
pub struct PreferredToggle<R, F> {
    rich: R,
    fallback: F,
}

impl<R, F> PreferredToggle<R, F> {
    pub fn new(rich: R, fallback: F) -> Self {
        Self { rich, fallback }
    }
}

impl<E, R, F> PanelToggle<E> for PreferredToggle<R, F>
where
    R: PanelToggle<E>,
    F: PanelToggle<E>,
{
    fn show(&self, element: &E, kind: PanelKind) -> HotkeyResult<()> {
        if self.rich.is_available(kind) {
            match self.rich.show(element, kind) {
                Ok(()) => return Ok(()),
                Err(e) => log::warn!("{} component failed, using fallback: {}", kind.component_name(), e),
            }
        }
        self.fallback.show(element, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HotkeyError;
    use std::cell::RefCell;

    struct Recorder {
        name: &'static str,
        available: bool,
        fails: bool,
        log: RefCell<Vec<(&'static str, PanelKind)>>,
    }

    impl Recorder {
        fn new(name: &'static str, available: bool, fails: bool) -> Self {
            Self {
                name,
                available,
                fails,
                log: RefCell::new(Vec::new()),
            }
        }
    }

    impl PanelToggle<()> for &Recorder {
        fn is_available(&self, _kind: PanelKind) -> bool {
            self.available
        }

        fn show(&self, _element: &(), kind: PanelKind) -> HotkeyResult<()> {
            self.log.borrow_mut().push((self.name, kind));
            if self.fails {
                Err(HotkeyError::Component("boom".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_prefers_rich_when_available() {
        let rich = Recorder::new("rich", true, false);
        let manual = Recorder::new("manual", true, false);
        let toggle = PreferredToggle::new(&rich, &manual);

        toggle.show(&(), PanelKind::Offcanvas).unwrap();

        assert_eq!(rich.log.borrow().as_slice(), &[("rich", PanelKind::Offcanvas)]);
        assert!(manual.log.borrow().is_empty());
    }

    #[test]
    fn test_falls_back_when_unavailable() {
        let rich = Recorder::new("rich", false, false);
        let manual = Recorder::new("manual", true, false);
        let toggle = PreferredToggle::new(&rich, &manual);

        toggle.show(&(), PanelKind::Modal).unwrap();

        assert!(rich.log.borrow().is_empty());
        assert_eq!(manual.log.borrow().as_slice(), &[("manual", PanelKind::Modal)]);
    }

    #[test]
    fn test_falls_back_when_rich_fails() {
        let rich = Recorder::new("rich", true, true);
        let manual = Recorder::new("manual", true, false);
        let toggle = PreferredToggle::new(&rich, &manual);

        assert!(toggle.show(&(), PanelKind::Offcanvas).is_ok());
        assert_eq!(rich.log.borrow().len(), 1);
        assert_eq!(manual.log.borrow().len(), 1);
    }
}
