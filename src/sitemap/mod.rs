//! Sitemap and robots.txt generation.
//!
//! # Data Flow
//! ```text
//! SiteConfig routes
//!     → URL collection (static entries + dynamic expansion via fetch.rs)
//!     → generator.rs (sitemap.xml with lastmod/changefreq/priority)
//!     → robots.rs (robots.txt with crawl policy + sitemap location)
//!     → output directory
//! ```

pub mod fetch;
pub mod generator;
pub mod robots;

pub use fetch::{DynamicPathFetcher, FetchError, HttpFetcher};
pub use generator::{FileGenerator, GenerateError, GeneratedFiles};
