//! Route path patterns.

pub mod matcher;

pub use matcher::RoutePattern;
