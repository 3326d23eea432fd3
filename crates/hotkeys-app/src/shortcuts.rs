//! Keyboard shortcut registry and documentation.

use hotkeys_core::{Action, Context, NavTarget, Role};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub shift: bool,
    pub action: Action,
    pub description: &'static str,
    /// Only available to manager/admin/staff/superuser.
    pub elevated: bool,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        shift: bool,
        action: Action,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            shift,
            action,
            description,
            elevated: false,
        }
    }

    const fn elevated(mut self) -> Self {
        self.elevated = true;
        self
    }

    /// Format the shortcut for display (e.g., "Shift+R").
    pub fn format(&self) -> String {
        if self.shift {
            format!("Shift+{}", self.key.to_uppercase())
        } else {
            self.key.to_string()
        }
    }

    /// Whether the shortcut is usable with the given role.
    pub fn visible_to(&self, role: Role) -> bool {
        !self.elevated || role.is_elevated()
    }

    /// Navigation target this shortcut needs, if any.
    pub fn nav_target(&self) -> Option<NavTarget> {
        match self.action {
            Action::ToggleFilters => Some(NavTarget::Filters),
            action => action.nav_target(),
        }
    }

    /// Whether the page provides what this shortcut needs.
    ///
    /// The filters shortcut also works with an in-page panel, so a missing
    /// filters URL only means "maybe".
    pub fn is_configured(&self, context: &Context) -> bool {
        match self.nav_target() {
            Some(NavTarget::Filters) | None => true,
            Some(target) => context.url(target).is_some(),
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("g", false, Action::OpenCatalog, "Go to catalog"),
            Shortcut::new("/", false, Action::FocusSearch, "Focus search"),
            Shortcut::new("c", false, Action::OpenCart, "Open cart"),
            Shortcut::new("o", false, Action::OpenCheckout, "Checkout"),
            Shortcut::new("f", false, Action::ToggleFilters, "Show filters"),
            Shortcut::new("n", false, Action::NextPage, "Next page"),
            Shortcut::new("p", false, Action::PrevPage, "Previous page"),
            Shortcut::new("t", false, Action::ToggleTheme, "Toggle light/dark theme"),
            Shortcut::new("h", false, Action::GoHome, "Go home"),
            Shortcut::new("r", false, Action::Reload, "Reload page"),
            Shortcut::new("r", true, Action::ReloadHard, "Reload, bypassing cache"),
            Shortcut::new("a", false, Action::OpenAdminOrders, "Orders admin").elevated(),
            Shortcut::new("?", false, Action::OpenHelp, "Show this help"),
            Shortcut::new("Escape", false, Action::DismissOverlay, "Close panel while typing"),
        ]
    }

    /// Shortcuts usable with the given role.
    pub fn for_role(role: Role) -> Vec<Shortcut> {
        Self::all()
            .into_iter()
            .filter(|s| s.visible_to(role))
            .collect()
    }

    /// Render the cheat sheet for a page context as plain text.
    pub fn render(context: &Context) -> String {
        let mut out = String::from("=== Keyboard Shortcuts ===\n");
        for shortcut in Self::for_role(context.role) {
            let note = if shortcut.is_configured(context) {
                ""
            } else {
                "  (not on this page)"
            };
            out.push_str(&format!(
                "  {:10} {}{}\n",
                shortcut.format(),
                shortcut.description,
                note
            ));
        }
        out
    }

    /// Print the cheat sheet to stdout.
    pub fn print_all(context: &Context) {
        println!("\n{}", Self::render(context));
    }
}
