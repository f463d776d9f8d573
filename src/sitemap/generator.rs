//! Sitemap file generation.
//!
//! # Responsibilities
//! - Collect absolute URLs for every included route (static + dynamic)
//! - Write sitemap.xml with lastmod/changefreq/priority metadata
//! - Write robots.txt alongside it
//!
//! # Design Decisions
//! - Dynamic fetch failures degrade to the route's base dynamic path,
//!   never to a generation failure
//! - Generated URLs map back to their route via RoutePattern so entry
//!   metadata survives dynamic expansion

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use url::Url;

use crate::config::schema::{RobotsConfig, RouteConfig};
use crate::routing::RoutePattern;
use crate::sitemap::fetch::DynamicPathFetcher;
use crate::sitemap::robots;

/// Error type for file generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Paths of the files written by one generation run.
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub sitemap: PathBuf,
    pub robots: PathBuf,
    pub url_count: usize,
}

/// Normalize a path to exactly one leading slash and no trailing slashes.
fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

/// Generates sitemap.xml and robots.txt for a route set.
pub struct FileGenerator {
    base_url: Url,
    output_dir: PathBuf,
}

impl FileGenerator {
    pub fn new(base_url: &str, output_dir: impl Into<PathBuf>) -> Result<Self, GenerateError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            output_dir: output_dir.into(),
        })
    }

    fn absolute(&self, path: &str) -> Result<String, GenerateError> {
        Ok(self.base_url.join(&normalize_path(path))?.to_string())
    }

    /// Collect URLs and write both files into the output directory.
    pub async fn generate<F>(
        &self,
        routes: &[RouteConfig],
        robots_config: &RobotsConfig,
        fetcher: &F,
    ) -> Result<GeneratedFiles, GenerateError>
    where
        F: DynamicPathFetcher + Sync,
    {
        let urls = self.collect_urls(routes, fetcher).await?;

        tokio::fs::create_dir_all(&self.output_dir).await?;

        let sitemap_path = self.output_dir.join("sitemap.xml");
        let xml = self.render_sitemap(&urls, routes);
        tokio::fs::write(&sitemap_path, xml).await?;

        let robots_path = self.output_dir.join("robots.txt");
        tokio::fs::write(&robots_path, robots::render(robots_config, &self.base_url)).await?;

        tracing::info!(
            urls = urls.len(),
            output_dir = %self.output_dir.display(),
            "sitemap and robots files generated"
        );

        Ok(GeneratedFiles {
            sitemap: sitemap_path,
            robots: robots_path,
            url_count: urls.len(),
        })
    }

    async fn collect_urls<F>(
        &self,
        routes: &[RouteConfig],
        fetcher: &F,
    ) -> Result<Vec<String>, GenerateError>
    where
        F: DynamicPathFetcher + Sync,
    {
        let mut urls = Vec::new();

        for route in routes {
            let Some(sitemap) = &route.sitemap else {
                continue;
            };
            if !sitemap.include {
                continue;
            }

            if sitemap.dynamic {
                let base_path = sitemap
                    .dynamic_base
                    .clone()
                    .unwrap_or_else(|| RoutePattern::new(&route.path).static_prefix());
                let endpoint = sitemap.endpoint.as_deref().unwrap_or_default();
                let model_opt = sitemap.model_opt.as_deref().unwrap_or_default();

                match fetcher.fetch(endpoint, &base_path, model_opt).await {
                    Ok(paths) => {
                        for path in paths {
                            urls.push(self.absolute(&path)?);
                        }
                    }
                    Err(e) => {
                        // Fall back to the base dynamic path so the route is
                        // still represented.
                        tracing::warn!(
                            path = %route.path,
                            error = %e,
                            "dynamic path fetch failed, falling back to base path"
                        );
                        urls.push(self.absolute(&base_path)?);
                    }
                }
            } else {
                urls.push(self.absolute(&route.path)?);
            }
        }

        Ok(urls)
    }

    fn render_sitemap(&self, urls: &[String], routes: &[RouteConfig]) -> String {
        let date = Utc::now().format("%Y-%m-%d").to_string();
        let patterns: Vec<(RoutePattern, &RouteConfig)> = routes
            .iter()
            .map(|r| (RoutePattern::new(&r.path), r))
            .collect();

        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );

        for url in urls {
            let route = self.find_matching_route(url, &patterns);

            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(url)));
            xml.push_str(&format!("    <lastmod>{date}</lastmod>\n"));

            if let Some(sitemap) = route.and_then(|r| r.sitemap.as_ref()) {
                if let Some(freq) = sitemap.change_freq {
                    xml.push_str(&format!(
                        "    <changefreq>{}</changefreq>\n",
                        freq.as_str()
                    ));
                }
                if let Some(priority) = sitemap.priority {
                    xml.push_str(&format!("    <priority>{priority}</priority>\n"));
                }
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Map a generated URL back to its route definition.
    fn find_matching_route<'a>(
        &self,
        url: &str,
        patterns: &[(RoutePattern, &'a RouteConfig)],
    ) -> Option<&'a RouteConfig> {
        let relative = url
            .strip_prefix(self.base_url.as_str().trim_end_matches('/'))
            .unwrap_or(url);
        let relative = relative.trim_end_matches('/');
        let relative = if relative.is_empty() { "/" } else { relative };

        patterns
            .iter()
            .find(|(pattern, _)| pattern.matches(relative))
            .map(|(_, route)| *route)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
