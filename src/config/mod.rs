//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route manifest (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → consumed by guard / seo / sitemap
//!
//! On reload signal (--watch):
//!     watcher.rs detects change
//!     → loader.rs loads new manifest
//!     → validation.rs validates
//!     → fresh SiteConfig delivered over channel
//!     → invalid reloads dropped, last good config kept
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal manifests
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use schema::RouteConfig;
pub use schema::SiteConfig;
pub use schema::SitemapConfig;
