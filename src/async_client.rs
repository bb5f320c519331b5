//! Async wrapper around [`ScryfallSorter`] for use in async runtimes (Tokio, etc.).
//!
//! Runs the blocking HTTP client on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Searches share no mutable state, so concurrent calls run in parallel.
//!
//! # Example
//!
//! ```no_run
//! use scryfall_sorter::{AsyncScryfallSorter, SortMode};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sorter = AsyncScryfallSorter::builder().build().await.unwrap();
//!
//!     let organized = sorter.organize("flying", SortMode::Mana).await.unwrap();
//!     println!("{} categories", organized.category_count());
//! }
//! ```

use std::sync::Arc;

use crate::error::{Result, SorterError};
use crate::models::Card;
use crate::organize::{Organized, SortMode};
use crate::{ScryfallSorter, ScryfallSorterBuilder};

// ---------------------------------------------------------------------------
// AsyncScryfallSorterBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AsyncScryfallSorter`]; accepts the same options as
/// [`ScryfallSorterBuilder`].
#[derive(Debug, Clone, Default)]
pub struct AsyncScryfallSorterBuilder {
    inner: ScryfallSorterBuilder,
}

impl AsyncScryfallSorterBuilder {
    /// Adjust the underlying blocking builder.
    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ScryfallSorterBuilder) -> ScryfallSorterBuilder,
    {
        self.inner = f(self.inner);
        self
    }

    /// Build the async sorter.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool,
    /// since it cannot be created from inside an async context.
    pub async fn build(self) -> Result<AsyncScryfallSorter> {
        tokio::task::spawn_blocking(move || {
            let sorter = self.inner.build()?;
            Ok(AsyncScryfallSorter {
                inner: Arc::new(sorter),
            })
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncScryfallSorter
// ---------------------------------------------------------------------------

/// Async wrapper around [`ScryfallSorter`].
#[derive(Clone)]
pub struct AsyncScryfallSorter {
    inner: Arc<ScryfallSorter>,
}

impl AsyncScryfallSorter {
    pub fn builder() -> AsyncScryfallSorterBuilder {
        AsyncScryfallSorterBuilder::default()
    }

    /// Run a sync sorter operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ScryfallSorter) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sorter = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sorter))
            .await
            .map_err(join_error)?
    }

    /// Fetch all cards whose oracle text matches `query`.
    pub async fn search(&self, query: &str) -> Result<Vec<Card>> {
        let query = query.to_string();
        self.run(move |s| s.search(&query)).await
    }

    /// Fetch and organize; see [`ScryfallSorter::organize`].
    pub async fn organize(&self, query: &str, mode: SortMode) -> Result<Organized> {
        let query = query.to_string();
        self.run(move |s| s.organize(&query, mode)).await
    }
}

fn join_error(e: tokio::task::JoinError) -> SorterError {
    SorterError::InvalidArgument(format!("Task join error: {e}"))
}
