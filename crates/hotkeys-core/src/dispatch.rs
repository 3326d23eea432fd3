//! Key-to-action selection and execution.
//!
//! Selection ([`select`]) is a pure function of the key event and the page
//! context. Execution ([`Dispatcher::perform`]) runs the selected action
//! against the page collaborators and swallows any failure after logging it.

use crate::action::{Action, NavTarget};
use crate::context::Context;
use crate::error::HotkeyResult;
use crate::input::KeyEvent;
use crate::page::{Announcer, Page, PanelKind, PanelToggle, ReloadMode};
use crate::theme::{theme_announcement, ThemeNotifier};

/// Outcome of selecting an action for a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub action: Action,
    /// Whether the browser's default key behavior must be suppressed.
    pub prevent_default: bool,
}

impl Dispatch {
    /// Event passes through untouched.
    pub const IGNORED: Dispatch = Dispatch {
        action: Action::NoOp,
        prevent_default: false,
    };

    fn intercept(action: Action) -> Self {
        Self {
            action,
            prevent_default: true,
        }
    }

    fn observe(action: Action) -> Self {
        Self {
            action,
            prevent_default: false,
        }
    }

    /// Whether this dispatch does anything at all.
    pub fn is_ignored(&self) -> bool {
        self.action == Action::NoOp && !self.prevent_default
    }
}

/// Select the action for a key event.
pub fn select(event: &KeyEvent, context: &Context) -> Dispatch {
    let key = event.key.as_str();
    let shift = event.modifiers.shift;

    // Help is reachable even while typing.
    if key == "?" || (shift && key == "/") {
        return Dispatch::intercept(Action::OpenHelp);
    }

    if event.target.is_editable() {
        return if key == "Escape" {
            Dispatch::observe(Action::DismissOverlay)
        } else {
            Dispatch::IGNORED
        };
    }

    let action = match key {
        "g" => Action::OpenCatalog,
        "/" => Action::FocusSearch,
        "c" => Action::OpenCart,
        "o" => Action::OpenCheckout,
        "f" => Action::ToggleFilters,
        "n" => Action::NextPage,
        "p" => Action::PrevPage,
        "t" => Action::ToggleTheme,
        "h" => Action::GoHome,
        "r" if shift => Action::ReloadHard,
        "r" => Action::Reload,
        "a" if context.role.is_elevated() => Action::OpenAdminOrders,
        _ => return Dispatch::IGNORED,
    };
    Dispatch::intercept(action)
}

/// Runs hotkey actions against a page.
pub struct Dispatcher<P: Page> {
    context: Context,
    page: P,
    toggle: Box<dyn PanelToggle<P::Element>>,
    announcer: Box<dyn Announcer>,
    notifier: Box<dyn ThemeNotifier>,
}

impl<P: Page> Dispatcher<P> {
    pub fn new(
        context: Context,
        page: P,
        toggle: impl PanelToggle<P::Element> + 'static,
        announcer: impl Announcer + 'static,
        notifier: impl ThemeNotifier + 'static,
    ) -> Self {
        Self {
            context,
            page,
            toggle: Box::new(toggle),
            announcer: Box::new(announcer),
            notifier: Box::new(notifier),
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Select the action for an event without running it.
    pub fn select(&self, event: &KeyEvent) -> Dispatch {
        select(event, &self.context)
    }

    /// Select and run the action for an event.
    ///
    /// Callers bound to a real event must honor `prevent_default` on the
    /// returned dispatch; prefer [`select`](Self::select) followed by
    /// [`perform`](Self::perform) to suppress the default before acting.
    pub fn handle(&self, event: &KeyEvent) -> Dispatch {
        let dispatch = self.select(event);
        if !dispatch.is_ignored() {
            log::debug!(
                "Hotkey {:?} ({}) -> {}",
                event.key,
                event.code,
                dispatch.action
            );
        }
        self.perform(dispatch.action);
        dispatch
    }

    /// Run an action. Failures are logged and otherwise ignored.
    pub fn perform(&self, action: Action) {
        let result = match action {
            Action::NoOp => Ok(()),
            Action::OpenHelp => self.open_help(),
            Action::DismissOverlay => self.dismiss_overlay(),
            Action::FocusSearch => self.focus_search(),
            Action::ToggleFilters => self.toggle_filters(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Reload => self.page.reload(ReloadMode::Normal),
            Action::ReloadHard => self.page.reload(ReloadMode::Forced),
            Action::OpenCatalog
            | Action::OpenCart
            | Action::OpenCheckout
            | Action::NextPage
            | Action::PrevPage
            | Action::GoHome
            | Action::OpenAdminOrders => match action.nav_target() {
                Some(target) => self.go(target),
                None => Ok(()),
            },
        };

        if let Err(e) = result {
            log::warn!("Hotkey action {} failed: {}", action, e);
        }
    }

    fn go(&self, target: NavTarget) -> HotkeyResult<()> {
        match self.context.url(target) {
            Some(url) => self.page.navigate(url),
            None => {
                log::debug!("No {} URL on this page", target);
                Ok(())
            }
        }
    }

    fn open_help(&self) -> HotkeyResult<()> {
        match self.page.help_overlay() {
            Some(overlay) => self.toggle.show(&overlay, PanelKind::Modal),
            None => Ok(()),
        }
    }

    fn dismiss_overlay(&self) -> HotkeyResult<()> {
        if let Some(overlay) = self.page.open_overlay() {
            self.page.dismiss(&overlay)?;
        }
        Ok(())
    }

    fn focus_search(&self) -> HotkeyResult<()> {
        match self.page.search_input() {
            Some(input) => self.page.focus_and_select(&input),
            None => Ok(()),
        }
    }

    fn toggle_filters(&self) -> HotkeyResult<()> {
        if let Some(panel) = self.page.filter_panel() {
            return self.toggle.show(&panel, PanelKind::Offcanvas);
        }
        self.go(NavTarget::Filters)
    }

    fn toggle_theme(&self) -> HotkeyResult<()> {
        let dark = self.page.toggle_theme()?;
        if let Some(endpoint) = self.context.theme_endpoint() {
            // Fire-and-forget: the notifier detaches the request and drops
            // its outcome, so a failure never undoes the local toggle.
            self.notifier.notify(endpoint);
        }
        self.announcer.announce(theme_announcement(dark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Role;
    use crate::input::{Modifiers, TargetKind};
    use crate::page::{MemoryElement, MemoryPage};

    fn context(role: Role) -> Context {
        Context::from_pairs([
            ("urlHome", "/"),
            ("urlCatalog", "/catalog"),
            ("urlCart", "/cart"),
            ("urlCheckout", "/checkout"),
            ("urlNext", "/catalog?page=3"),
            ("urlPrev", "/catalog?page=1"),
            ("urlAdminOrders", "/admin/orders"),
            ("urlToggleTheme", "/api/user/toggle-theme/"),
            ("role", role.as_str()),
        ])
    }

    fn dispatcher(context: Context, page: &MemoryPage) -> Dispatcher<MemoryPage> {
        Dispatcher::new(context, page.clone(), page.clone(), page.clone(), page.clone())
    }

    const EDITABLE: [TargetKind; 4] = [
        TargetKind::Input,
        TargetKind::TextArea,
        TargetKind::Select,
        TargetKind::ContentEditable,
    ];

    #[test]
    fn test_catalog_scenario() {
        let ctx = Context::from_pairs([("urlCatalog", "/catalog"), ("role", "guest")]);
        let page = MemoryPage::new();

        let dispatch = dispatcher(ctx, &page).handle(&KeyEvent::new("g"));

        assert_eq!(dispatch.action, Action::OpenCatalog);
        assert!(dispatch.prevent_default);
        assert_eq!(page.state().location(), Some("/catalog"));
    }

    #[test]
    fn test_navigation_bindings() {
        let cases = [
            ("c", "/cart"),
            ("o", "/checkout"),
            ("n", "/catalog?page=3"),
            ("p", "/catalog?page=1"),
            ("h", "/"),
        ];
        for (key, url) in cases {
            let page = MemoryPage::new();
            dispatcher(context(Role::Guest), &page).handle(&KeyEvent::new(key));
            assert_eq!(page.state().location(), Some(url), "key {}", key);
        }
    }

    #[test]
    fn test_missing_target_is_silent() {
        let page = MemoryPage::new();
        let dispatch = dispatcher(Context::default(), &page).handle(&KeyEvent::new("c"));

        assert!(dispatch.prevent_default);
        assert!(page.state().navigations.is_empty());
    }

    #[test]
    fn test_typing_passes_through() {
        let page = MemoryPage::new().with_search_input().with_filter_panel();
        let d = dispatcher(context(Role::Admin), &page);

        for target in EDITABLE {
            for key in ["g", "c", "o", "f", "n", "p", "t", "h", "r", "a", "/", "x"] {
                let dispatch = d.handle(&KeyEvent::new(key).on(target));
                assert_eq!(dispatch, Dispatch::IGNORED, "key {} on {:?}", key, target);
            }
            for key in ["r", "a", "g", "R", "A", "F"] {
                let dispatch = d.handle(&KeyEvent::new(key).with_shift().on(target));
                assert_eq!(dispatch, Dispatch::IGNORED, "Shift+{} on {:?}", key, target);
            }
            let ctrl = Modifiers {
                ctrl: true,
                ..Modifiers::default()
            };
            let dispatch = d.handle(&KeyEvent::new("c").with_modifiers(ctrl).on(target));
            assert_eq!(dispatch, Dispatch::IGNORED, "Ctrl+c on {:?}", target);
        }

        let state = page.state();
        assert!(state.navigations.is_empty());
        assert!(state.reloads.is_empty());
        assert!(state.shown.is_empty());
        assert!(!state.theme_dark);
    }

    #[test]
    fn test_help_always_reachable() {
        for target in EDITABLE.into_iter().chain([TargetKind::Other]) {
            let page = MemoryPage::new().with_help_overlay();
            let d = dispatcher(context(Role::Guest), &page);

            let question = d.handle(&KeyEvent::new("?").on(target));
            let shifted = d.handle(&KeyEvent::new("/").with_shift().on(target));

            assert_eq!(question.action, Action::OpenHelp);
            assert_eq!(shifted.action, Action::OpenHelp);
            assert!(question.prevent_default && shifted.prevent_default);
            assert_eq!(
                page.state().shown,
                vec![
                    (MemoryElement::HelpOverlay, PanelKind::Modal),
                    (MemoryElement::HelpOverlay, PanelKind::Modal)
                ]
            );
        }
    }

    #[test]
    fn test_help_without_overlay_is_noop() {
        let page = MemoryPage::new();
        let dispatch = dispatcher(context(Role::Guest), &page).handle(&KeyEvent::new("?"));

        assert_eq!(dispatch.action, Action::OpenHelp);
        assert!(page.state().shown.is_empty());
    }

    #[test]
    fn test_escape_in_input_dismisses_overlay() {
        let page = MemoryPage::new().with_open_overlay(true);
        let dispatch =
            dispatcher(context(Role::Guest), &page).handle(&KeyEvent::new("Escape").on(TargetKind::Input));

        assert_eq!(dispatch.action, Action::DismissOverlay);
        assert!(!dispatch.prevent_default);
        let state = page.state();
        assert_eq!(state.dismissals, 1);
        assert!(state.navigations.is_empty());
    }

    #[test]
    fn test_escape_without_overlay() {
        let page = MemoryPage::new();
        dispatcher(context(Role::Guest), &page).handle(&KeyEvent::new("Escape").on(TargetKind::TextArea));

        assert_eq!(page.state().dismissals, 0);
    }

    #[test]
    fn test_escape_outside_editable_is_ignored() {
        let page = MemoryPage::new().with_open_overlay(true);
        let dispatch = dispatcher(context(Role::Guest), &page).handle(&KeyEvent::new("Escape"));

        assert_eq!(dispatch, Dispatch::IGNORED);
        assert_eq!(page.state().dismissals, 0);
    }

    #[test]
    fn test_admin_orders_role_gate() {
        let guest = MemoryPage::new();
        let dispatch = dispatcher(context(Role::Guest), &guest).handle(&KeyEvent::new("a"));
        assert_eq!(dispatch, Dispatch::IGNORED);
        assert!(guest.state().navigations.is_empty());

        for role in [Role::Manager, Role::Admin, Role::Staff, Role::Superuser] {
            let page = MemoryPage::new();
            let dispatch = dispatcher(context(role), &page).handle(&KeyEvent::new("a"));
            assert!(dispatch.prevent_default);
            assert_eq!(page.state().location(), Some("/admin/orders"), "role {}", role);
        }
    }

    #[test]
    fn test_admin_orders_unconfigured() {
        let page = MemoryPage::new();
        let ctx = Context::from_pairs([("role", "admin")]);
        let dispatch = dispatcher(ctx, &page).handle(&KeyEvent::new("a"));

        assert_eq!(dispatch.action, Action::OpenAdminOrders);
        assert!(page.state().navigations.is_empty());
    }

    #[test]
    fn test_unrecognized_role_is_guest() {
        let page = MemoryPage::new();
        let ctx = Context::from_pairs([("role", "owner"), ("urlAdminOrders", "/admin/orders")]);
        let dispatch = dispatcher(ctx, &page).handle(&KeyEvent::new("a"));

        assert_eq!(dispatch, Dispatch::IGNORED);
        assert!(page.state().navigations.is_empty());
    }

    #[test]
    fn test_theme_toggle_pair() {
        let page = MemoryPage::new();
        let d = dispatcher(context(Role::Guest), &page);

        d.handle(&KeyEvent::new("t"));
        assert!(page.state().theme_dark);
        d.handle(&KeyEvent::new("t"));

        let state = page.state();
        assert!(!state.theme_dark);
        assert_eq!(state.notifications.len(), 2);
        assert_eq!(state.notifications[0], "/api/user/toggle-theme/");
        assert_eq!(state.announcements, vec!["Dark theme on", "Light theme on"]);
    }

    #[test]
    fn test_theme_toggle_without_endpoint() {
        let page = MemoryPage::new();
        dispatcher(Context::default(), &page).handle(&KeyEvent::new("t"));

        let state = page.state();
        assert!(state.theme_dark);
        assert!(state.notifications.is_empty());
        assert_eq!(state.announcements.len(), 1);
    }

    #[test]
    fn test_filters_panel_never_navigates() {
        let page = MemoryPage::new().with_filter_panel();
        let ctx = Context::from_pairs([("urlFilters", "/catalog/filters")]);
        dispatcher(ctx, &page).handle(&KeyEvent::new("f"));

        let state = page.state();
        assert!(state.navigations.is_empty());
        assert_eq!(state.shown, vec![(MemoryElement::FilterPanel, PanelKind::Offcanvas)]);
    }

    #[test]
    fn test_filters_url_fallback() {
        let page = MemoryPage::new();
        let ctx = Context::from_pairs([("urlFilters", "/catalog/filters")]);
        dispatcher(ctx, &page).handle(&KeyEvent::new("f"));

        let state = page.state();
        assert_eq!(state.navigations, vec!["/catalog/filters"]);
        assert!(state.shown.is_empty());
    }

    #[test]
    fn test_filters_without_panel_or_url_does_nothing() {
        let page = MemoryPage::new().with_open_overlay(true);
        let dispatch = dispatcher(Context::default(), &page).handle(&KeyEvent::new("f"));

        assert_eq!(dispatch.action, Action::ToggleFilters);
        let state = page.state();
        assert!(state.navigations.is_empty());
        assert!(state.shown.is_empty());
        assert_eq!(state.dismissals, 0);
        assert!(!state.theme_dark);
    }

    #[test]
    fn test_reload_modes() {
        let page = MemoryPage::new();
        let d = dispatcher(context(Role::Guest), &page);

        assert_eq!(d.handle(&KeyEvent::new("r")).action, Action::Reload);
        assert_eq!(d.handle(&KeyEvent::new("r").with_shift()).action, Action::ReloadHard);
        assert_eq!(page.state().reloads, vec![ReloadMode::Normal, ReloadMode::Forced]);
    }

    #[test]
    fn test_focus_search() {
        let page = MemoryPage::new().with_search_input();
        let dispatch = dispatcher(context(Role::Guest), &page).handle(&KeyEvent::new("/"));

        assert_eq!(dispatch.action, Action::FocusSearch);
        assert_eq!(page.state().focused, Some(MemoryElement::SearchInput));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let page = MemoryPage::new();
        let d = dispatcher(context(Role::Admin), &page);

        for key in ["G", "C", "A", "R", "Enter", "KeyG"] {
            assert_eq!(d.handle(&KeyEvent::new(key)), Dispatch::IGNORED, "key {}", key);
        }
        assert!(page.state().navigations.is_empty());
    }

    #[test]
    fn test_non_shift_modifiers_do_not_change_selection() {
        let ctx = context(Role::Guest);
        let held = Modifiers {
            ctrl: true,
            alt: true,
            meta: true,
            shift: false,
        };

        let dispatch = select(&KeyEvent::new("g").with_modifiers(held), &ctx);
        assert_eq!(dispatch.action, Action::OpenCatalog);
        assert!(dispatch.prevent_default);

        let hard = select(
            &KeyEvent::new("r").with_modifiers(Modifiers { shift: true, ..held }),
            &ctx,
        );
        assert_eq!(hard.action, Action::ReloadHard);
    }

    #[test]
    fn test_select_is_pure() {
        let ctx = context(Role::Staff);
        let event = KeyEvent::new("a").with_code("KeyA");

        assert_eq!(select(&event, &ctx), select(&event, &ctx));
        assert_eq!(select(&event, &ctx).action, Action::OpenAdminOrders);
    }
}
