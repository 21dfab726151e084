//! Error types for the pagination component.
//!
//! Two kinds of failure exist. [`Error`] covers configuration contract
//! violations, reported when a paginator is built. [`FetchError`] wraps
//! whatever a data source fails with; it travels back to the parent
//! application inside a [`FetchFailedMsg`](crate::paginator::FetchFailedMsg).

use crate::paginator::DisplayMode;
use std::sync::Arc;
use thiserror::Error;

/// Configuration errors raised while constructing a paginator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The display mode name is not one of `numbered`, `dotted` or `loadmore`.
    #[error("unknown display mode `{0}`, expected one of: numbered, dotted, loadmore")]
    UnknownDisplayMode(String),

    /// A slice source was configured with a page size of zero.
    #[error("items per page must be at least 1")]
    ZeroPerPage,

    /// The initial page was zero. Pages are numbered from 1.
    #[error("initial page must be at least 1")]
    ZeroInitialPage,

    /// A callback source has no total page count, which only load-more
    /// navigation can live without.
    #[error("a total page count is required for {0} navigation")]
    MissingTotal(DisplayMode),
}

/// A failure reported by a data source.
///
/// The underlying error is reference counted so the value can be cloned
/// into messages and kept as the paginator's last error at the same time.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagination::FetchError;
///
/// let err = FetchError::msg("connection reset");
/// assert_eq!(err.to_string(), "failed to fetch page data: connection reset");
/// ```
#[derive(Debug, Clone, Error)]
#[error("failed to fetch page data: {0}")]
pub struct FetchError(Arc<dyn std::error::Error + Send + Sync>);

impl FetchError {
    /// Wraps any error produced by a data source.
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(Arc::from(err.into()))
    }

    /// Creates a fetch error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(message.into())
    }

    /// Returns the error produced by the data source.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

/// Result type used by data sources.
pub type FetchResult<T> = Result<Vec<T>, FetchError>;
