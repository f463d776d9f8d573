//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (sitemap priority, availability windows)
//! - Detect conflicting routes (duplicate paths)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::SiteConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("route {index}: path must be non-empty and start with '/' (got {path:?})")]
    InvalidPath { index: usize, path: String },

    #[error("route {index}: duplicate path {path:?}")]
    DuplicatePath { index: usize, path: String },

    #[error("route {index} ({path}): title must be non-empty")]
    EmptyTitle { index: usize, path: String },

    #[error("route {index} ({path}): sitemap priority {priority} outside 0.0..=1.0")]
    PriorityOutOfRange {
        index: usize,
        path: String,
        priority: f32,
    },

    #[error("route {index} ({path}): dynamic sitemap entry needs both endpoint and model_opt")]
    IncompleteDynamicSitemap { index: usize, path: String },

    #[error("route {index} ({path}): available_from is after available_until")]
    InvertedAvailabilityWindow { index: usize, path: String },

    #[error("base_url {url:?} is not a valid http(s) URL")]
    InvalidBaseUrl { url: String },
}

/// Validate a parsed manifest. Collects every error rather than stopping at
/// the first, so a broken manifest can be fixed in one pass.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.base_url.is_empty() {
        match url::Url::parse(&config.base_url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            _ => {
                errors.push(ValidationError::InvalidBaseUrl {
                    url: config.base_url.clone(),
                });
            }
        }
    }

    let mut seen_paths = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if route.path.is_empty() || !route.path.starts_with('/') {
            errors.push(ValidationError::InvalidPath {
                index,
                path: route.path.clone(),
            });
        } else if !seen_paths.insert(route.path.clone()) {
            errors.push(ValidationError::DuplicatePath {
                index,
                path: route.path.clone(),
            });
        }

        if route.title.is_empty() {
            errors.push(ValidationError::EmptyTitle {
                index,
                path: route.path.clone(),
            });
        }

        if let Some(sitemap) = &route.sitemap {
            if let Some(priority) = sitemap.priority {
                if !(0.0..=1.0).contains(&priority) {
                    errors.push(ValidationError::PriorityOutOfRange {
                        index,
                        path: route.path.clone(),
                        priority,
                    });
                }
            }
            if sitemap.dynamic && (sitemap.endpoint.is_none() || sitemap.model_opt.is_none()) {
                errors.push(ValidationError::IncompleteDynamicSitemap {
                    index,
                    path: route.path.clone(),
                });
            }
        }

        if let (Some(from), Some(until)) = (route.available_from, route.available_until) {
            if from > until {
                errors.push(ValidationError::InvertedAvailabilityWindow {
                    index,
                    path: route.path.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
