//! The fixed set of hotkey actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A navigation target supplied by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavTarget {
    Home,
    Catalog,
    Cart,
    Checkout,
    Filters,
    Next,
    Prev,
    AdminOrders,
}

impl NavTarget {
    /// All navigation targets, in page-attribute order.
    pub const ALL: [NavTarget; 8] = [
        NavTarget::Home,
        NavTarget::Catalog,
        NavTarget::Cart,
        NavTarget::Checkout,
        NavTarget::Filters,
        NavTarget::Next,
        NavTarget::Prev,
        NavTarget::AdminOrders,
    ];

    /// Dataset key carrying this target's URL (e.g. `urlAdminOrders`).
    pub fn dataset_key(self) -> &'static str {
        match self {
            NavTarget::Home => "urlHome",
            NavTarget::Catalog => "urlCatalog",
            NavTarget::Cart => "urlCart",
            NavTarget::Checkout => "urlCheckout",
            NavTarget::Filters => "urlFilters",
            NavTarget::Next => "urlNext",
            NavTarget::Prev => "urlPrev",
            NavTarget::AdminOrders => "urlAdminOrders",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NavTarget::Home => "home",
            NavTarget::Catalog => "catalog",
            NavTarget::Cart => "cart",
            NavTarget::Checkout => "checkout",
            NavTarget::Filters => "filters",
            NavTarget::Next => "next",
            NavTarget::Prev => "prev",
            NavTarget::AdminOrders => "admin-orders",
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Action selected for a single key event.
///
/// Actions carry no state; the enum tag is all there is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    OpenCatalog,
    FocusSearch,
    OpenCart,
    OpenCheckout,
    ToggleFilters,
    NextPage,
    PrevPage,
    ToggleTheme,
    GoHome,
    Reload,
    ReloadHard,
    OpenAdminOrders,
    OpenHelp,
    DismissOverlay,
    NoOp,
}

impl Action {
    /// The navigation target a plain "go to URL" action resolves to.
    ///
    /// `ToggleFilters` is not listed: it only navigates when no panel exists.
    pub fn nav_target(self) -> Option<NavTarget> {
        match self {
            Action::OpenCatalog => Some(NavTarget::Catalog),
            Action::OpenCart => Some(NavTarget::Cart),
            Action::OpenCheckout => Some(NavTarget::Checkout),
            Action::NextPage => Some(NavTarget::Next),
            Action::PrevPage => Some(NavTarget::Prev),
            Action::GoHome => Some(NavTarget::Home),
            Action::OpenAdminOrders => Some(NavTarget::AdminOrders),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::OpenCatalog => "open-catalog",
            Action::FocusSearch => "focus-search",
            Action::OpenCart => "open-cart",
            Action::OpenCheckout => "open-checkout",
            Action::ToggleFilters => "toggle-filters",
            Action::NextPage => "next-page",
            Action::PrevPage => "prev-page",
            Action::ToggleTheme => "toggle-theme",
            Action::GoHome => "go-home",
            Action::Reload => "reload",
            Action::ReloadHard => "reload-hard",
            Action::OpenAdminOrders => "open-admin-orders",
            Action::OpenHelp => "open-help",
            Action::DismissOverlay => "dismiss-overlay",
            Action::NoOp => "no-op",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
