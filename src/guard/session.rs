//! Session and redirect collaborators.
//!
//! The evaluator itself takes an explicit [`SessionContext`]; this module is
//! the seam where host applications plug in their token store and their
//! redirect path mapping, plus an optional process-global install point.

use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::guard::types::{RedirectReason, RedirectTarget, SessionContext};

/// Source of the caller's credentials (e.g., a token store or cookie jar).
pub trait SessionSource: Send + Sync {
    fn token(&self) -> Option<String>;
    fn role(&self) -> Option<String>;
}

/// A fixed, in-memory session source. Useful for tests and static setups.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl SessionSource for StaticSession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn role(&self) -> Option<String> {
        self.role.clone()
    }
}

/// Maps logical redirect reasons to physical route paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectMap {
    pub login: String,
    pub admin_login: String,
    pub unauthorized: String,
    pub not_found: String,
}

impl Default for RedirectMap {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            admin_login: "/admin/login".to_string(),
            unauthorized: "/unauthorized".to_string(),
            not_found: "/404".to_string(),
        }
    }
}

impl RedirectMap {
    pub fn path_for(&self, reason: RedirectReason) -> &str {
        match reason {
            RedirectReason::Login => &self.login,
            RedirectReason::AdminLogin => &self.admin_login,
            RedirectReason::Unauthorized => &self.unauthorized,
            RedirectReason::NotFound => &self.not_found,
        }
    }

    /// Resolve a redirect target to a physical path. Override paths pass
    /// through verbatim.
    pub fn resolve(&self, target: &RedirectTarget) -> String {
        match target {
            RedirectTarget::Path(path) => path.clone(),
            RedirectTarget::Reason(reason) => self.path_for(*reason).to_string(),
        }
    }
}

/// Errors at the security-context boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecurityError {
    /// Usage error: the global context was read before [`Security::install`]
    /// ran. Fix the setup; retrying cannot help.
    #[error("security context accessed before installation; call Security::install first")]
    NotInitialized,

    #[error("security context already installed")]
    AlreadyInstalled,
}

/// Bundles the session source with the redirect mapping.
pub struct Security {
    source: Arc<dyn SessionSource>,
    redirects: RedirectMap,
}

static GLOBAL: OnceLock<Security> = OnceLock::new();

impl Security {
    pub fn new(source: Arc<dyn SessionSource>, redirects: RedirectMap) -> Self {
        Self { source, redirects }
    }

    /// Build with the default redirect paths.
    pub fn with_defaults(source: Arc<dyn SessionSource>) -> Self {
        Self::new(source, RedirectMap::default())
    }

    /// Snapshot the current session for one evaluation.
    pub fn session(&self) -> SessionContext {
        SessionContext::new(self.source.token(), self.source.role())
    }

    pub fn redirects(&self) -> &RedirectMap {
        &self.redirects
    }

    /// Resolve a redirect target to a physical path.
    pub fn resolve(&self, target: &RedirectTarget) -> String {
        self.redirects.resolve(target)
    }

    /// Install this context as the process-global instance. One shot.
    pub fn install(self) -> Result<(), SecurityError> {
        GLOBAL
            .set(self)
            .map_err(|_| SecurityError::AlreadyInstalled)
    }

    /// The process-global context, if installed.
    pub fn global() -> Result<&'static Security, SecurityError> {
        GLOBAL.get().ok_or(SecurityError::NotInitialized)
    }
}
