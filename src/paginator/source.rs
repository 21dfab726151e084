//! Data sources feeding the paginator.
//!
//! A source either hands over the whole collection once ([`Source::Slice`])
//! and lets the paginator cut it into pages, or answers one page at a time
//! ([`Source::Callback`]). Both can be synchronous or asynchronous; the
//! paginator always runs them inside a command so the UI never blocks.

use crate::error::{FetchError, FetchResult};
use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Future returned by a data source.
pub type FetchFuture<T> = BoxFuture<'static, FetchResult<T>>;

/// Loads the complete collection.
pub type FetchAll<T> = Arc<dyn Fn() -> FetchFuture<T> + Send + Sync>;

/// Loads the items of one page, counted from 1.
pub type FetchPage<T> = Arc<dyn Fn(usize) -> FetchFuture<T> + Send + Sync>;

/// The data-sourcing strategy, without the data source itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// Fetch everything once and slice locally.
    Slice,
    /// Fetch each page on demand.
    Callback,
}

/// Where the paginator gets its items from.
///
/// Mode-dependent requirements live in the variants: a page size only
/// exists for slicing, a total only for per-page fetching.
pub enum Source<T> {
    /// The whole collection is fetched once and sliced into pages of
    /// `per_page` items.
    Slice {
        /// Items per page.
        per_page: usize,
        /// Loads the full collection.
        fetch: FetchAll<T>,
    },
    /// Each page is fetched on demand.
    Callback {
        /// Number of pages. May be zero for load-more navigation, where the
        /// end is open.
        total: usize,
        /// Loads one page.
        fetch: FetchPage<T>,
    },
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::Slice { per_page, fetch } => Source::Slice {
                per_page: *per_page,
                fetch: Arc::clone(fetch),
            },
            Source::Callback { total, fetch } => Source::Callback {
                total: *total,
                fetch: Arc::clone(fetch),
            },
        }
    }
}

impl<T> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Slice { per_page, .. } => f
                .debug_struct("Slice")
                .field("per_page", per_page)
                .finish_non_exhaustive(),
            Source::Callback { total, .. } => f
                .debug_struct("Callback")
                .field("total", total)
                .finish_non_exhaustive(),
        }
    }
}

impl<T: Send + 'static> Source<T> {
    /// An asynchronous source for the whole collection.
    ///
    /// ```rust
    /// use bubbletea_pagination::paginator::Source;
    ///
    /// let source = Source::slice(10, || async { Ok(vec!["Alien", "Heat", "Ran"]) });
    /// ```
    pub fn slice<F, Fut>(per_page: usize, fetch: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = FetchResult<T>> + Send + 'static,
    {
        Source::Slice {
            per_page,
            fetch: Arc::new(move || fetch().boxed()),
        }
    }

    /// A synchronous, infallible source for the whole collection.
    pub fn slice_fn<F>(per_page: usize, fetch: F) -> Self
    where
        F: Fn() -> Vec<T> + Send + Sync + 'static,
    {
        Source::Slice {
            per_page,
            fetch: Arc::new(move || {
                futures::future::ready(Ok::<_, FetchError>(fetch())).boxed()
            }),
        }
    }

    /// An asynchronous per-page source.
    ///
    /// ```rust
    /// use bubbletea_pagination::paginator::Source;
    ///
    /// let source = Source::callback(4, |page| async move { Ok(vec![format!("review {page}")]) });
    /// ```
    pub fn callback<F, Fut>(total: usize, fetch: F) -> Self
    where
        F: Fn(usize) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = FetchResult<T>> + Send + 'static,
    {
        Source::Callback {
            total,
            fetch: Arc::new(move |page| fetch(page).boxed()),
        }
    }

    /// A synchronous, infallible per-page source.
    pub fn callback_fn<F>(total: usize, fetch: F) -> Self
    where
        F: Fn(usize) -> Vec<T> + Send + Sync + 'static,
    {
        Source::Callback {
            total,
            fetch: Arc::new(move |page| {
                futures::future::ready(Ok::<_, FetchError>(fetch(page))).boxed()
            }),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Source<T> {
    /// Slices an in-memory collection.
    pub fn from_vec(per_page: usize, items: Vec<T>) -> Self {
        let items = Arc::new(items);
        Self::slice_fn(per_page, move || items.as_ref().clone())
    }
}

impl<T> Source<T> {
    /// The strategy this source uses.
    pub fn data_mode(&self) -> DataMode {
        match self {
            Source::Slice { .. } => DataMode::Slice,
            Source::Callback { .. } => DataMode::Callback,
        }
    }

    pub(crate) fn fetch(&self, page: usize) -> FetchFuture<T> {
        match self {
            Source::Slice { fetch, .. } => fetch(),
            Source::Callback { fetch, .. } => fetch(page),
        }
    }
}
