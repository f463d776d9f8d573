//! Dynamic sitemap path fetching.
//!
//! Dynamic routes ("/blog/:slug") expand to concrete paths by querying an
//! API endpoint that returns a JSON array of objects; one property of each
//! object becomes the slug.

use thiserror::Error;
use url::Url;

/// Error type for dynamic path fetching.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint {endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Resolves the concrete paths behind a dynamic route.
pub trait DynamicPathFetcher {
    /// Fetch the expanded paths for one dynamic route. `base_path` is the
    /// prefix fetched slugs are appended to.
    fn fetch(
        &self,
        endpoint: &str,
        base_path: &str,
        model_opt: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, FetchError>> + Send;
}

/// HTTP-backed fetcher. Attaches a Bearer token when one is available.
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: Url,
    bearer_token: Option<String>,
}

impl HttpFetcher {
    pub fn new(base_url: Url, bearer_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            bearer_token,
        }
    }
}

impl DynamicPathFetcher for HttpFetcher {
    async fn fetch(
        &self,
        endpoint: &str,
        base_path: &str,
        model_opt: &str,
    ) -> Result<Vec<String>, FetchError> {
        let target = self.base_url.join(endpoint)?;

        let mut request = self.client.get(target);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        let data: serde_json::Value = response.json().await?;
        let Some(items) = data.as_array() else {
            tracing::warn!(endpoint, "expected JSON array from endpoint, got non-array");
            return Ok(Vec::new());
        };

        let base = base_path.trim_end_matches('/');
        let paths = items
            .iter()
            .filter_map(|item| item.get(model_opt)?.as_str())
            .filter(|slug| !slug.is_empty())
            .map(|slug| format!("{base}/{slug}"))
            .collect();

        Ok(paths)
    }
}
