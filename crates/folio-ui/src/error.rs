//! Error types for DOM helpers.

use thiserror::Error;

/// Result type alias using `UiError`.
pub type Result<T> = std::result::Result<T, UiError>;

/// Failures when reaching into the DOM.
///
/// None of these are fatal; callers log them and skip the action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// No global `window` (not running in a browser).
    #[error("window is not available")]
    NoWindow,

    /// The window has no document.
    #[error("document is not available")]
    NoDocument,

    /// No element with the requested id.
    #[error("element not found: #{0}")]
    ElementNotFound(String),
}

impl UiError {
    pub fn element_not_found(id: impl Into<String>) -> Self {
        Self::ElementNotFound(id.into())
    }
}
