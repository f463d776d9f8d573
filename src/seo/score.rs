//! SEO score computation.
//!
//! # Design Decisions
//! - Checks are a declarative table over a pre-lowercased metadata view;
//!   each check is independent of every other check's result
//! - All string comparisons are case-insensitive
//! - A missing focus keyword fails every keyword-dependent check

use crate::config::schema::{RouteConfig, SocialCardMeta};
use crate::seo::types::{SeoChecklistItem, SeoReport};

/// Lowercased snapshot of the metadata the checks look at.
struct MetaView {
    focus_keyword: Option<String>,
    path: String,
    title: String,
    description: String,
    title_len: usize,
    description_len: usize,
    canonical_https: bool,
    open_graph_complete: bool,
    twitter_card_complete: bool,
    schema_valid: bool,
    lang_set: bool,
}

fn card_complete(card: &Option<SocialCardMeta>) -> bool {
    card.as_ref().is_some_and(|c| {
        c.title.as_deref().is_some_and(|t| !t.is_empty())
            && c.description.as_deref().is_some_and(|d| !d.is_empty())
            && !c.image.is_empty()
    })
}

impl MetaView {
    fn from_route(route: &RouteConfig) -> Self {
        let focus_keyword = route
            .keywords
            .first()
            .map(|k| k.to_lowercase())
            .filter(|k| !k.is_empty());
        let title = route.title.to_lowercase();
        let description = route
            .meta_description
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();

        Self {
            focus_keyword,
            path: route.path.to_lowercase(),
            title_len: title.chars().count(),
            description_len: description.chars().count(),
            title,
            description,
            canonical_https: route
                .canonical
                .as_deref()
                .is_some_and(|c| c.starts_with("https://")),
            open_graph_complete: card_complete(&route.open_graph),
            twitter_card_complete: card_complete(&route.twitter_card),
            schema_valid: route.schema.is_some() && route.schema_data.is_some(),
            lang_set: route.lang.as_deref().is_some_and(|l| !l.is_empty()),
        }
    }

    fn keyword(&self) -> Option<&str> {
        self.focus_keyword.as_deref()
    }
}

struct CheckSpec {
    key: &'static str,
    label: &'static str,
    hint: &'static str,
    weight: u32,
    check: fn(&MetaView) -> bool,
}

/// The checklist, in display order. Weights sum to 75.
const CHECKS: &[CheckSpec] = &[
    CheckSpec {
        key: "focusKeywordPresent",
        label: "Focus Keyword Defined",
        hint: "Define a main focus keyword.",
        weight: 5,
        check: |m| m.keyword().is_some(),
    },
    CheckSpec {
        key: "keywordInTitle",
        label: "Keyword in Title",
        hint: "Focus keyword should appear in the page title.",
        weight: 10,
        check: |m| m.keyword().is_some_and(|k| m.title.contains(k)),
    },
    CheckSpec {
        key: "keywordAtStartOfTitle",
        label: "Keyword at Start of Title",
        hint: "Start the title with the focus keyword.",
        weight: 5,
        check: |m| m.keyword().is_some_and(|k| m.title.starts_with(k)),
    },
    CheckSpec {
        key: "keywordInMetaDescription",
        label: "Keyword in Meta Description",
        hint: "Mention the focus keyword in meta description.",
        weight: 10,
        check: |m| m.keyword().is_some_and(|k| m.description.contains(k)),
    },
    CheckSpec {
        key: "keywordInURL",
        label: "Keyword in URL",
        hint: "Focus keyword should appear in the page path.",
        weight: 10,
        check: |m| m.keyword().is_some_and(|k| m.path.contains(k)),
    },
    CheckSpec {
        key: "titleLengthOptimal",
        label: "Optimal Title Length",
        hint: "Title should be 30-60 characters.",
        weight: 5,
        check: |m| (30..=60).contains(&m.title_len),
    },
    CheckSpec {
        key: "metaDescLengthOptimal",
        label: "Optimal Meta Description Length",
        hint: "Meta description should be 120-160 characters.",
        weight: 5,
        check: |m| (120..=160).contains(&m.description_len),
    },
    CheckSpec {
        key: "canonicalDefined",
        label: "Canonical URL",
        hint: "Should be set and start with https://",
        weight: 5,
        check: |m| m.canonical_https,
    },
    CheckSpec {
        key: "openGraphComplete",
        label: "OpenGraph Complete",
        hint: "Should include title, description, and image.",
        weight: 5,
        check: |m| m.open_graph_complete,
    },
    CheckSpec {
        key: "twitterCardComplete",
        label: "Twitter Card Complete",
        hint: "Should include title, description, and image.",
        weight: 5,
        check: |m| m.twitter_card_complete,
    },
    CheckSpec {
        key: "schemaValid",
        label: "Schema Defined",
        hint: "Schema and structured data must be defined.",
        weight: 5,
        check: |m| m.schema_valid,
    },
    CheckSpec {
        key: "languageSet",
        label: "Language Defined",
        hint: "Language code should be defined.",
        weight: 5,
        check: |m| m.lang_set,
    },
];

/// The maximum achievable total: the sum of all checklist weights.
pub fn max_score() -> u32 {
    CHECKS.iter().map(|c| c.weight).sum()
}

/// Score a route's SEO metadata against the weighted checklist.
///
/// Pure and deterministic; the report can be re-derived on every metadata
/// change or memoized keyed by the route.
pub fn score(route: &RouteConfig) -> SeoReport {
    let view = MetaView::from_route(route);

    let checklist: Vec<SeoChecklistItem> = CHECKS
        .iter()
        .map(|spec| SeoChecklistItem {
            key: spec.key,
            passed: (spec.check)(&view),
            label: spec.label,
            hint: spec.hint,
            weight: spec.weight,
        })
        .collect();

    let total = checklist
        .iter()
        .filter(|item| item.passed)
        .map(|item| item.weight)
        .sum();

    SeoReport {
        score: total,
        checklist,
    }
}
