//! Route-level SEO and access-control toolkit for single-page applications.
//!
//! Two pure decision procedures form the core: [`guard::evaluate`] maps a
//! route's guard configuration plus a session snapshot to an access decision,
//! and [`seo::score`] computes a weighted SEO checklist over a route's
//! metadata. Around them: a TOML route manifest, sitemap.xml/robots.txt
//! generation with dynamic path expansion, and a small CLI.

pub mod config;
pub mod guard;
pub mod observability;
pub mod routing;
pub mod seo;
pub mod sitemap;

pub use config::schema::SiteConfig;
pub use guard::{evaluate, AccessPolicy, Decision, SessionContext};
pub use seo::{score, SeoReport};
pub use sitemap::FileGenerator;
