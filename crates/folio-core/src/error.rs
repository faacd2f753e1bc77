//! Error types for the folio core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for folio.
///
/// These only surface when an identifier arrives as text (an anchor id, a
/// tab name); the static content itself cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Identifier does not name an itinerary tab.
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// Identifier does not name an itinerary location.
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    /// Identifier does not name a portfolio section.
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

impl CoreError {
    /// Create a new unknown tab error.
    pub fn unknown_tab(id: impl Into<String>) -> Self {
        Self::UnknownTab(id.into())
    }

    /// Create a new unknown location error.
    pub fn unknown_location(id: impl Into<String>) -> Self {
        Self::UnknownLocation(id.into())
    }

    /// Create a new unknown section error.
    pub fn unknown_section(id: impl Into<String>) -> Self {
        Self::UnknownSection(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tab_error() {
        let err = CoreError::unknown_tab("itinerary");
        assert!(err.to_string().contains("Unknown tab"));
        assert!(err.to_string().contains("itinerary"));
    }

    #[test]
    fn test_unknown_location_error() {
        let err = CoreError::unknown_location("seattle");
        assert_eq!(err.to_string(), "Unknown location: seattle");
    }

    #[test]
    fn test_unknown_section_error() {
        let err = CoreError::unknown_section("#projects");
        assert!(err.to_string().contains("#projects"));
    }
}
