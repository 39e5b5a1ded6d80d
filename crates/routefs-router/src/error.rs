//! Dispatch errors.

use thiserror::Error;

use crate::request::Method;

/// Why no chain could be selected for a request.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No registered pattern matched the path.
    #[error("no route for {method} {path}")]
    NotFound {
        /// The request method.
        method: Method,
        /// The unmatched path.
        path: String,
    },

    /// A pattern matched the path, but under a different method.
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed {
        /// The rejected method.
        method: Method,
        /// The matched path.
        path: String,
    },
}

/// Result type alias for route selection.
pub type Result<T> = std::result::Result<T, RouterError>;
