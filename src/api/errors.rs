/// Errors from the OpenHub API layer.
use thiserror::Error;

/// Typed errors for a single info lookup.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested lookup kind is not one the API supports.
    #[error("unsupported info kind '{kind}' (expected 'project' or 'account')")]
    UnsupportedKind {
        /// The rejected kind string.
        kind: String,
    },

    /// The server answered with a non-success HTTP status.
    /// Not coerced to "no data": a 404 and an empty project are different things.
    #[error("OpenHub returned HTTP {status} for {url}")]
    Status {
        /// The non-success status code.
        status: reqwest::StatusCode,
        /// The request URL.
        url: String,
    },

    /// Connection-level failure: DNS, connect, or timeout.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not well-formed XML.
    #[error("malformed XML in response: {0}")]
    Xml(#[from] roxmltree::Error),
}
