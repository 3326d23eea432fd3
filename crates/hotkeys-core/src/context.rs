//! Page context: navigation URLs and user role, read once at startup.

use crate::action::NavTarget;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Dataset key for the theme-toggle endpoint.
pub const THEME_ENDPOINT_KEY: &str = "urlToggleTheme";
/// Dataset key for the user role.
pub const ROLE_KEY: &str = "role";

/// Role of the current user as rendered into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Guest,
    Manager,
    Admin,
    Staff,
    Superuser,
    /// A role string we don't know. Treated like a guest.
    Unrecognized,
}

impl Role {
    /// Parse a role string. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Self {
        match s {
            "guest" => Role::Guest,
            "manager" => Role::Manager,
            "admin" => Role::Admin,
            "staff" => Role::Staff,
            "superuser" => Role::Superuser,
            _ => Role::Unrecognized,
        }
    }

    /// Whether role-gated shortcuts are available.
    pub fn is_elevated(self) -> bool {
        matches!(
            self,
            Role::Manager | Role::Admin | Role::Staff | Role::Superuser
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Manager => "manager",
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Superuser => "superuser",
            Role::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional navigation URLs provided by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavTargets {
    pub home: Option<String>,
    pub catalog: Option<String>,
    pub cart: Option<String>,
    pub checkout: Option<String>,
    pub filters: Option<String>,
    pub next: Option<String>,
    pub prev: Option<String>,
    pub admin_orders: Option<String>,
}

impl NavTargets {
    /// URL for a target, if configured and non-empty.
    pub fn get(&self, target: NavTarget) -> Option<&str> {
        let url = match target {
            NavTarget::Home => &self.home,
            NavTarget::Catalog => &self.catalog,
            NavTarget::Cart => &self.cart,
            NavTarget::Checkout => &self.checkout,
            NavTarget::Filters => &self.filters,
            NavTarget::Next => &self.next,
            NavTarget::Prev => &self.prev,
            NavTarget::AdminOrders => &self.admin_orders,
        };
        non_empty(url.as_deref())
    }

    /// Set the URL for a target.
    pub fn set(&mut self, target: NavTarget, url: Option<String>) {
        let slot = match target {
            NavTarget::Home => &mut self.home,
            NavTarget::Catalog => &mut self.catalog,
            NavTarget::Cart => &mut self.cart,
            NavTarget::Checkout => &mut self.checkout,
            NavTarget::Filters => &mut self.filters,
            NavTarget::Next => &mut self.next,
            NavTarget::Prev => &mut self.prev,
            NavTarget::AdminOrders => &mut self.admin_orders,
        };
        *slot = url;
    }
}

/// Immutable page context handed to the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Context {
    pub urls: NavTargets,
    pub theme_endpoint: Option<String>,
    pub role: Role,
}

impl Context {
    /// Build a context from a dataset-style lookup (`urlCatalog`, `role`, ...).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut urls = NavTargets::default();
        for target in NavTarget::ALL {
            urls.set(target, lookup(target.dataset_key()));
        }

        let role = match lookup(ROLE_KEY) {
            Some(raw) if !raw.is_empty() => {
                let role = Role::parse(&raw);
                if role == Role::Unrecognized {
                    log::debug!("Unrecognized role {:?}, treating as guest", raw);
                }
                role
            }
            _ => Role::Guest,
        };

        Self {
            urls,
            theme_endpoint: lookup(THEME_ENDPOINT_KEY),
            role,
        }
    }

    /// Build a context from attribute pairs.
    ///
    /// Accepts dataset keys (`urlAdminOrders`) as well as attribute names
    /// (`data-url-admin-orders`).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (dataset_key(k.as_ref()), v.into()))
            .collect();
        Self::from_lookup(|key| map.get(key).cloned())
    }

    /// Parse a context from camelCase JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// URL for a navigation target, if configured.
    pub fn url(&self, target: NavTarget) -> Option<&str> {
        self.urls.get(target)
    }

    /// Theme-toggle endpoint, if configured.
    pub fn theme_endpoint(&self) -> Option<&str> {
        non_empty(self.theme_endpoint.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Convert an attribute name to its dataset key.
///
/// `data-url-admin-orders` becomes `urlAdminOrders`; keys already in
/// dataset form pass through unchanged.
pub fn dataset_key(name: &str) -> String {
    let name = name.strip_prefix("data-").unwrap_or(name);
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
