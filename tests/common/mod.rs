//! Shared builders and fakes for integration tests.

use seorion::config::schema::{RouteConfig, SitemapConfig};
use seorion::sitemap::{DynamicPathFetcher, FetchError};

/// Minimal route with the given path and title.
pub fn route(path: &str, title: &str) -> RouteConfig {
    RouteConfig {
        path: path.to_string(),
        title: title.to_string(),
        ..RouteConfig::default()
    }
}

/// Route with a static sitemap entry.
#[allow(dead_code)]
pub fn sitemap_route(path: &str, title: &str) -> RouteConfig {
    let mut r = route(path, title);
    r.sitemap = Some(SitemapConfig {
        include: true,
        ..SitemapConfig::default()
    });
    r
}

/// In-memory fetcher: returns fixed paths, or fails when `fail` is set.
#[allow(dead_code)]
pub struct StaticFetcher {
    pub paths: Vec<String>,
    pub fail: bool,
}

impl DynamicPathFetcher for StaticFetcher {
    async fn fetch(
        &self,
        endpoint: &str,
        _base_path: &str,
        _model_opt: &str,
    ) -> Result<Vec<String>, FetchError> {
        if self.fail {
            Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status: 500,
            })
        } else {
            Ok(self.paths.clone())
        }
    }
}
