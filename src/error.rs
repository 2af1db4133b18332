//! Error types for rs-whatif.
//!
//! Fatal conditions are [`Error`] values: they abort the conversion of the
//! current article. Recoverable conditions are [`Warning`] values: they are
//! logged, collected in the output and never stop the conversion.

use serde::Serialize;

/// Failure at the page retrieval boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request failed before a status code became available
    /// (connection refused, DNS failure, timeout, ...).
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The server answered with a non-200 status code.
    #[error("request to {url} returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    /// The server answered with something other than `text/html`.
    #[error("content type of {url} is {content_type:?}, expected text/html")]
    NonHtmlContentType { url: String, content_type: String },
}

impl FetchError {
    /// URL of the request that failed.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. }
            | Self::HttpStatus { url, .. }
            | Self::NonHtmlContentType { url, .. } => url,
        }
    }
}

/// Error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A reference uses a relative form the resolver does not support
    /// (`foo.html`, `../foo.html`, ...).
    #[error("unsupported URL kind: {url:?}")]
    UnsupportedUrlKind { url: String },

    /// The page no longer matches the expected article template.
    #[error("expected element not found: {selector}")]
    MissingElement { selector: String },

    /// An element was found but its content has an unexpected shape.
    #[error("unexpected page template: {0}")]
    UnexpectedTemplate(String),

    /// The primary article page could not be downloaded.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing output files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status reported for this error category.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fetch(_) => 3,
            Self::MissingElement { .. } | Self::UnexpectedTemplate(_) => 4,
            Self::UnsupportedUrlKind { .. } => 5,
            Self::Io(_) => 6,
        }
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal degradation encountered while converting an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A direct child of `<article>` that no block handler understands.
    #[error("unexpected top level element <{tag}> skipped")]
    UnrecognizedTopLevelTag { tag: String },

    /// The display title of a reference could not be fetched; the
    /// placeholder was used instead.
    #[error("cannot get a title for {url}: {reason}")]
    TitleLookupFailed { url: String, reason: String },
}
