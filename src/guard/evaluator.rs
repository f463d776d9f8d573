//! Access evaluation.
//!
//! # Responsibilities
//! - Decide Allow vs Redirect for one route and one session
//! - Apply guard rules in a fixed precedence order
//!
//! # Design Decisions
//! - Ordered rule table, first match wins; explicit overrides (redirect,
//!   custom guard) outrank rule/time checks, which outrank token/role checks
//! - Availability bounds use strict comparisons: `now` equal to either
//!   bound is allowed
//! - Total over all inputs; absent optional fields mean "not applicable"

use chrono::{DateTime, Utc};

use crate::guard::types::{
    AccessPolicy, Decision, RedirectReason, RedirectTarget, SessionContext,
};

type RuleFn = fn(&AccessPolicy, &SessionContext, DateTime<Utc>) -> Option<Decision>;

struct Rule {
    name: &'static str,
    apply: RuleFn,
}

/// Guard rules in precedence order.
const RULES: &[Rule] = &[
    Rule {
        name: "redirect_override",
        apply: redirect_override,
    },
    Rule {
        name: "custom_guard",
        apply: custom_guard,
    },
    Rule {
        name: "access_rule",
        apply: access_rule,
    },
    Rule {
        name: "not_yet_available",
        apply: not_yet_available,
    },
    Rule {
        name: "no_longer_available",
        apply: no_longer_available,
    },
    Rule {
        name: "token_required",
        apply: token_required,
    },
    Rule {
        name: "role_mismatch",
        apply: role_mismatch,
    },
    Rule {
        name: "logged_user_excluded",
        apply: logged_user_excluded,
    },
];

/// Evaluate a route's guard configuration against a session snapshot.
///
/// Pure and total: every input combination yields a decision, and the inputs
/// are never mutated. The caller supplies `now` so time-window checks stay
/// deterministic under test.
pub fn evaluate(policy: &AccessPolicy, session: &SessionContext, now: DateTime<Utc>) -> Decision {
    for rule in RULES {
        if let Some(decision) = (rule.apply)(policy, session, now) {
            tracing::debug!(rule = rule.name, decision = ?decision, "guard rule matched");
            return decision;
        }
    }
    Decision::Allow
}

fn unauthorized() -> Option<Decision> {
    Some(Decision::Redirect(RedirectTarget::Reason(
        RedirectReason::Unauthorized,
    )))
}

fn redirect_override(
    policy: &AccessPolicy,
    _session: &SessionContext,
    _now: DateTime<Utc>,
) -> Option<Decision> {
    let destination = policy.redirect_override.as_ref()?.destination()?;
    if destination.is_empty() {
        return None;
    }
    Some(Decision::Redirect(RedirectTarget::Path(destination)))
}

fn custom_guard(
    policy: &AccessPolicy,
    _session: &SessionContext,
    _now: DateTime<Utc>,
) -> Option<Decision> {
    match &policy.custom_guard {
        Some(guard) if !guard.allows() => unauthorized(),
        _ => None,
    }
}

fn access_rule(
    policy: &AccessPolicy,
    session: &SessionContext,
    _now: DateTime<Utc>,
) -> Option<Decision> {
    match &policy.access_rule {
        Some(rule) if !rule.allows(session) => unauthorized(),
        _ => None,
    }
}

fn not_yet_available(
    policy: &AccessPolicy,
    _session: &SessionContext,
    now: DateTime<Utc>,
) -> Option<Decision> {
    match policy.available_from {
        Some(from) if now < from => unauthorized(),
        _ => None,
    }
}

fn no_longer_available(
    policy: &AccessPolicy,
    _session: &SessionContext,
    now: DateTime<Utc>,
) -> Option<Decision> {
    match policy.available_until {
        Some(until) if now > until => unauthorized(),
        _ => None,
    }
}

fn token_required(
    policy: &AccessPolicy,
    session: &SessionContext,
    _now: DateTime<Utc>,
) -> Option<Decision> {
    if policy.is_protected && session.token.is_none() {
        Some(Decision::Redirect(RedirectTarget::Reason(
            RedirectReason::Login,
        )))
    } else {
        None
    }
}

fn role_mismatch(
    policy: &AccessPolicy,
    session: &SessionContext,
    _now: DateTime<Utc>,
) -> Option<Decision> {
    let required = policy.required_role?;
    if policy.is_protected
        && session.token.is_some()
        && session.role.as_deref() != Some(required.as_str())
    {
        unauthorized()
    } else {
        None
    }
}

fn logged_user_excluded(
    policy: &AccessPolicy,
    session: &SessionContext,
    _now: DateTime<Utc>,
) -> Option<Decision> {
    if policy.logged_accessed && session.role.as_deref() == Some("admin") {
        Some(Decision::Redirect(RedirectTarget::Reason(
            RedirectReason::NotFound,
        )))
    } else {
        None
    }
}
