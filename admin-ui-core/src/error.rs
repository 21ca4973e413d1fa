//! Failures of the statistics chart loader.
//!
//! The other behaviors have no failure path: a missing element is a no-op.

use std::fmt;

/// Why the appointments chart was not drawn.
#[derive(Debug)]
pub enum LoadError {
    /// The request or reading its body failed.
    Fetch(anyhow::Error),
    /// The body is not a `[{date, count}]` JSON array.
    Decode(serde_json::Error),
    /// The chart constructor is missing or threw.
    Render(anyhow::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch(e) => write!(f, "stats request failed: {}", e),
            LoadError::Decode(e) => write!(f, "stats body is not a date/count series: {}", e),
            LoadError::Render(e) => write!(f, "chart construction failed: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Fetch(e) | LoadError::Render(e) => Some(&**e),
            LoadError::Decode(e) => Some(e),
        }
    }
}
