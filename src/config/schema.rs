//! Configuration schema definitions.
//!
//! This module defines the complete route-manifest structure. All types
//! derive Serde traits for deserialization from TOML manifests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Root configuration: site-wide settings plus every route definition.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Site base URL (e.g., "https://example.com"). Required for sitemap
    /// generation; optional for auditing.
    pub base_url: String,

    /// Output directory for generated files.
    pub output_dir: String,

    /// robots.txt policy.
    pub robots: RobotsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions.
    pub routes: Vec<RouteConfig>,
}

/// A single route with its SEO metadata, guard settings, and sitemap entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Route path template (e.g., "/about", "/blog/:slug").
    pub path: String,

    /// Page title.
    pub title: String,

    // SEO metadata
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
    pub tags: Vec<String>,
    pub canonical: Option<String>,
    pub open_graph: Option<SocialCardMeta>,
    pub twitter_card: Option<SocialCardMeta>,
    pub custom_meta: Vec<CustomMetaTag>,

    /// Schema type for structured data.
    pub schema: Option<SchemaType>,

    /// Structured-data payload for rich results.
    pub schema_data: Option<serde_json::Value>,

    /// Language of the route (used for i18n SEO).
    pub lang: Option<String>,

    /// Alternate URLs for multi-language sites.
    pub alt_links: Vec<AltLangLink>,

    // Route protection
    pub is_protected: bool,
    pub logged_accessed: bool,
    pub required_role: Option<crate::guard::Role>,

    // Availability constraints
    pub available_from: Option<DateTime<Utc>>,
    pub available_until: Option<DateTime<Utc>>,

    /// Sitemap entry configuration. Absent means excluded.
    pub sitemap: Option<SitemapConfig>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            title: String::new(),
            meta_description: None,
            keywords: Vec::new(),
            tags: Vec::new(),
            canonical: None,
            open_graph: None,
            twitter_card: None,
            custom_meta: Vec::new(),
            schema: None,
            schema_data: None,
            lang: None,
            alt_links: Vec::new(),
            is_protected: false,
            logged_accessed: false,
            required_role: None,
            available_from: None,
            available_until: None,
            sitemap: None,
        }
    }
}

/// Social preview metadata (Open Graph and Twitter Card share the shape).
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SocialCardMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: String,
}

/// Custom meta tag for head injection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CustomMetaTag {
    pub name: String,
    pub content: String,
}

/// Language alternate for hreflang.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AltLangLink {
    pub lang: String,
    pub href: String,
}

/// Schema.org type for structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SchemaType {
    WebPage,
    Article,
    Product,
}

/// Sitemap entry configuration for a route.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SitemapConfig {
    /// Whether the route should be included in the sitemap.
    pub include: bool,

    /// Recommended change frequency for search engines.
    pub change_freq: Option<ChangeFreq>,

    /// Priority of the route in the sitemap (0.0 to 1.0).
    pub priority: Option<f32>,

    /// Indicates if the route expands to dynamic paths.
    pub dynamic: bool,

    /// Endpoint to fetch dynamic paths from (relative to base_url).
    pub endpoint: Option<String>,

    /// Property key inside each response object to extract as slug.
    pub model_opt: Option<String>,

    /// Base path prefix for fetched slugs (e.g., "/blog"). Defaults to the
    /// route path with any `:param` segments stripped.
    pub dynamic_base: Option<String>,
}

/// Change frequency hint for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
        }
    }
}

/// robots.txt policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Paths disallowed for all user agents.
    pub disallow: Vec<String>,

    /// Paths explicitly allowed.
    pub allow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            disallow: vec![
                "/admin".to_string(),
                "/dashboard".to_string(),
                "/user".to_string(),
            ],
            allow: vec!["/".to_string()],
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
