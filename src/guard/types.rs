//! Guard types and strategy traits.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::schema::RouteConfig;

/// Role required by role-protected routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// Read-only snapshot of the caller's session. The evaluator never mutates
/// this; the role stays free-form because it comes from an external store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl SessionContext {
    pub fn new(token: Option<String>, role: Option<String>) -> Self {
        Self { token, role }
    }

    /// A session with no token and no role.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Outcome of access evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(RedirectTarget),
}

/// Logical redirect destinations. Physical paths live in [`RedirectMap`].
///
/// [`RedirectMap`]: crate::guard::session::RedirectMap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    Login,
    AdminLogin,
    Unauthorized,
    NotFound,
}

/// Where a denied request should go: a logical reason resolved later, or a
/// caller-supplied override path passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    Reason(RedirectReason),
    Path(String),
}

/// Custom yes/no guard attached to a route.
pub trait CustomGuard: Send + Sync {
    fn allows(&self) -> bool;
}

impl<F> CustomGuard for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn allows(&self) -> bool {
        self()
    }
}

/// Rule-based access check over the session (e.g., an ACL lookup).
pub trait AccessRule: Send + Sync {
    fn allows(&self, session: &SessionContext) -> bool;
}

impl<F> AccessRule for F
where
    F: Fn(&SessionContext) -> bool + Send + Sync,
{
    fn allows(&self, session: &SessionContext) -> bool {
        self(session)
    }
}

/// Unconditional redirect override. Returning `None` means no override.
pub trait RedirectOverride: Send + Sync {
    fn destination(&self) -> Option<String>;
}

impl<F> RedirectOverride for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn destination(&self) -> Option<String> {
        self()
    }
}

/// Per-route guard configuration, immutable for the evaluation lifetime.
///
/// Declarative fields come straight from the manifest; the strategy slots
/// are attached programmatically via the builder methods.
#[derive(Clone, Default)]
pub struct AccessPolicy {
    pub is_protected: bool,
    pub logged_accessed: bool,
    pub required_role: Option<Role>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_until: Option<DateTime<Utc>>,
    pub redirect_override: Option<Arc<dyn RedirectOverride>>,
    pub custom_guard: Option<Arc<dyn CustomGuard>>,
    pub access_rule: Option<Arc<dyn AccessRule>>,
}

impl fmt::Debug for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessPolicy")
            .field("is_protected", &self.is_protected)
            .field("logged_accessed", &self.logged_accessed)
            .field("required_role", &self.required_role)
            .field("available_from", &self.available_from)
            .field("available_until", &self.available_until)
            .field("redirect_override", &self.redirect_override.is_some())
            .field("custom_guard", &self.custom_guard.is_some())
            .field("access_rule", &self.access_rule.is_some())
            .finish()
    }
}

impl AccessPolicy {
    /// Build the declarative part of the policy from a manifest route.
    pub fn from_route(route: &RouteConfig) -> Self {
        Self {
            is_protected: route.is_protected,
            logged_accessed: route.logged_accessed,
            required_role: route.required_role,
            available_from: route.available_from,
            available_until: route.available_until,
            redirect_override: None,
            custom_guard: None,
            access_rule: None,
        }
    }

    pub fn with_custom_guard(mut self, guard: impl CustomGuard + 'static) -> Self {
        self.custom_guard = Some(Arc::new(guard));
        self
    }

    pub fn with_access_rule(mut self, rule: impl AccessRule + 'static) -> Self {
        self.access_rule = Some(Arc::new(rule));
        self
    }

    pub fn with_redirect_override(mut self, redirect: impl RedirectOverride + 'static) -> Self {
        self.redirect_override = Some(Arc::new(redirect));
        self
    }
}
