//! SEO health scoring.
//!
//! A fixed, weighted checklist over a route's metadata. Pure and
//! deterministic, so callers may memoize the report keyed by the route.

pub mod score;
pub mod types;

pub use score::{max_score, score};
pub use types::{ScoreBand, SeoChecklistItem, SeoReport};
