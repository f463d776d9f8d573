//! Property tests for the two decision procedures.

use chrono::{TimeZone, Utc};
use proptest::option;
use proptest::prelude::*;

use seorion::config::schema::RouteConfig;
use seorion::guard::{evaluate, AccessPolicy, Decision, Role, SessionContext};
use seorion::seo;

fn route_strategy() -> impl Strategy<Value = RouteConfig> {
    (
        "/[a-z/]{0,30}",
        ".{0,80}",
        option::of(".{0,200}"),
        proptest::collection::vec("[a-zA-Z]{0,12}", 0..4),
        option::of("https?://[a-z.]{1,20}/[a-z]{0,10}"),
        option::of("[a-z]{0,3}"),
    )
        .prop_map(|(path, title, desc, keywords, canonical, lang)| RouteConfig {
            path,
            title,
            meta_description: desc,
            keywords,
            canonical,
            lang,
            ..RouteConfig::default()
        })
}

fn policy_strategy() -> impl Strategy<Value = AccessPolicy> {
    (
        any::<bool>(),
        any::<bool>(),
        option::of(prop_oneof![Just(Role::Admin), Just(Role::User)]),
        option::of(0i64..2_000_000_000),
        option::of(0i64..2_000_000_000),
    )
        .prop_map(|(is_protected, logged_accessed, required_role, from, until)| {
            AccessPolicy {
                is_protected,
                logged_accessed,
                required_role,
                available_from: from.map(|s| Utc.timestamp_opt(s, 0).unwrap()),
                available_until: until.map(|s| Utc.timestamp_opt(s, 0).unwrap()),
                ..AccessPolicy::default()
            }
        })
}

fn session_strategy() -> impl Strategy<Value = SessionContext> {
    (
        option::of(Just("tok".to_string())),
        option::of(prop_oneof![
            Just("admin".to_string()),
            Just("user".to_string()),
            Just("editor".to_string())
        ]),
    )
        .prop_map(|(token, role)| SessionContext::new(token, role))
}

proptest! {
    /// The total never exceeds the sum of all weights, and always equals the
    /// sum of the passed items' weights.
    #[test]
    fn score_is_bounded_and_consistent(route in route_strategy()) {
        let report = seo::score(&route);
        prop_assert!(report.score <= seo::max_score());
        let recomputed: u32 = report
            .checklist
            .iter()
            .filter(|i| i.passed)
            .map(|i| i.weight)
            .sum();
        prop_assert_eq!(report.score, recomputed);
    }

    /// Turning a previously failing check into a passing one never lowers
    /// the total (monotonicity, exercised via the language check).
    #[test]
    fn setting_language_never_decreases_score(route in route_strategy()) {
        let mut without = route;
        without.lang = None;
        let base = seo::score(&without).score;

        let mut with = without.clone();
        with.lang = Some("en".to_string());
        prop_assert!(seo::score(&with).score >= base);
    }

    /// Scoring is deterministic.
    #[test]
    fn score_is_deterministic(route in route_strategy()) {
        prop_assert_eq!(seo::score(&route), seo::score(&route));
    }

    /// Every input combination yields a decision, and the same one twice.
    #[test]
    fn evaluate_is_total_and_deterministic(
        policy in policy_strategy(),
        session in session_strategy(),
        now_secs in 0i64..2_000_000_000,
    ) {
        let now = Utc.timestamp_opt(now_secs, 0).unwrap();
        let first = evaluate(&policy, &session, now);
        let second = evaluate(&policy, &session, now);
        prop_assert_eq!(first, second);
    }

    /// With no guards configured at all, everything is allowed.
    #[test]
    fn unguarded_routes_always_allow(session in session_strategy(), now_secs in 0i64..2_000_000_000) {
        let policy = AccessPolicy {
            logged_accessed: false,
            ..AccessPolicy::default()
        };
        let now = Utc.timestamp_opt(now_secs, 0).unwrap();
        prop_assert_eq!(evaluate(&policy, &session, now), Decision::Allow);
    }
}
