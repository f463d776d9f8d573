//! SEO report types.

use serde::Serialize;

/// One entry in the SEO checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoChecklistItem {
    pub key: &'static str,
    pub passed: bool,
    pub label: &'static str,
    pub hint: &'static str,
    pub weight: u32,
}

/// Scoring result: the weighted total plus the full checklist in display
/// order. Checklist order never affects the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoReport {
    pub score: u32,
    pub checklist: Vec<SeoChecklistItem>,
}

/// Coarse rating bands for display. The scorer itself enforces no ceiling;
/// these are the default thresholds, callers may band differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Medium,
    Bad,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        if score >= 85 {
            ScoreBand::Good
        } else if score >= 60 {
            ScoreBand::Medium
        } else {
            ScoreBand::Bad
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Medium => "medium",
            ScoreBand::Bad => "bad",
        }
    }
}
