//! Route path matching logic.
//!
//! # Responsibilities
//! - Match concrete paths against route templates ("/blog/:slug")
//! - Normalize leading/trailing slashes before comparison
//!
//! # Design Decisions
//! - Literal segments match case-sensitively
//! - `:param` segments match any single non-empty segment
//! - No regex to guarantee O(n) matching

/// A compiled route path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

fn split_normalized(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

impl RoutePattern {
    /// Compile a path template. `:name` segments become parameters.
    pub fn new(template: &str) -> Self {
        let segments = split_normalized(template)
            .into_iter()
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Returns true if the concrete path matches this template.
    pub fn matches(&self, path: &str) -> bool {
        let parts = split_normalized(path);
        if parts.len() != self.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(parts)
            .all(|(segment, part)| match segment {
                Segment::Literal(lit) => lit == part,
                Segment::Param(_) => true,
            })
    }

    /// True if the template contains any `:param` segments.
    pub fn is_dynamic(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Param(_)))
    }

    /// The longest literal prefix of the template (e.g., "/blog" for
    /// "/blog/:slug"). Used as the default base for dynamic expansion.
    pub fn static_prefix(&self) -> String {
        let mut prefix = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    prefix.push('/');
                    prefix.push_str(lit);
                }
                Segment::Param(_) => break,
            }
        }
        if prefix.is_empty() {
            prefix.push('/');
        }
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_pattern_matches_exactly() {
        let pattern = RoutePattern::new("/about");
        assert!(pattern.matches("/about"));
        assert!(pattern.matches("/about/"));
        assert!(!pattern.matches("/About"));
        assert!(!pattern.matches("/about/team"));
    }

    #[test]
    fn param_pattern_matches_any_segment() {
        let pattern = RoutePattern::new("/blog/:slug");
        assert!(pattern.matches("/blog/hello-world"));
        assert!(!pattern.matches("/blog"));
        assert!(!pattern.matches("/blog/a/b"));
    }

    #[test]
    fn root_pattern_matches_only_root() {
        let pattern = RoutePattern::new("/");
        assert!(pattern.matches("/"));
        assert!(pattern.matches(""));
        assert!(!pattern.matches("/a"));
    }

    #[test]
    fn static_prefix_stops_at_first_param() {
        assert_eq!(RoutePattern::new("/blog/:slug").static_prefix(), "/blog");
        assert_eq!(RoutePattern::new("/a/b/:c/:d").static_prefix(), "/a/b");
        assert_eq!(RoutePattern::new("/:id").static_prefix(), "/");
        assert_eq!(RoutePattern::new("/about").static_prefix(), "/about");
    }

    #[test]
    fn dynamic_detection() {
        assert!(RoutePattern::new("/blog/:slug").is_dynamic());
        assert!(!RoutePattern::new("/blog").is_dynamic());
    }
}
