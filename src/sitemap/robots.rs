//! robots.txt rendering.

use url::Url;

use crate::config::schema::RobotsConfig;

/// Render robots.txt: crawl policy plus the sitemap location.
pub fn render(config: &RobotsConfig, base_url: &Url) -> String {
    let mut lines = vec!["User-agent: *".to_string()];

    for path in &config.disallow {
        lines.push(format!("Disallow: {path}"));
    }
    for path in &config.allow {
        lines.push(format!("Allow: {path}"));
    }

    let sitemap_url = base_url
        .join("/sitemap.xml")
        .map(|u| u.to_string())
        .unwrap_or_else(|_| format!("{base_url}sitemap.xml"));
    lines.push(format!("Sitemap: {sitemap_url}"));

    lines.join("\n")
}
