//! Route access control.
//!
//! # Responsibilities
//! - Evaluate a route's guard configuration against the caller's session
//! - Emit logical redirect targets, resolved to physical paths elsewhere
//! - Provide the session/redirect collaborator seam
//!
//! # Design Decisions
//! - Evaluation is a pure function of (policy, session, now); no ambient state
//! - Precedence is an ordered rule table with first-match-wins, not nested ifs
//! - Optional guards are strategy objects (capability present or absent)

pub mod evaluator;
pub mod session;
pub mod types;

pub use evaluator::evaluate;
pub use session::{RedirectMap, Security, SecurityError, SessionSource};
pub use types::{
    AccessPolicy, AccessRule, CustomGuard, Decision, RedirectOverride, RedirectReason,
    RedirectTarget, Role, SessionContext,
};
