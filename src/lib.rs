//! Scryfall rules-text search, sorted into Magic: The Gathering categories.
//!
//! Fetches every card whose oracle text matches a query from the Scryfall
//! search API, then groups the results by card type, color identity
//! (with guild and shard/wedge names), mana value, or price.
//!
//! # Quick start
//!
//! ```no_run
//! use scryfall_sorter::{ScryfallSorter, SortMode};
//!
//! let sorter = ScryfallSorter::builder().build().unwrap();
//!
//! let organized = sorter.organize("draw a card", SortMode::Color).unwrap();
//! for category in &organized.categories {
//!     println!("{}: {} cards", category.label, category.cards.len());
//! }
//! ```
//!
//! The classification functions are pure and can be used on their own with
//! cards from any source:
//!
//! ```
//! use scryfall_sorter::{organize, parse_cards, SortMode};
//!
//! let cards = parse_cards(r#"[
//!     {"name": "Lightning Bolt", "type_line": "Instant", "cmc": 1.0,
//!      "color_identity": ["R"], "prices": {"usd": "0.25"}}
//! ]"#).unwrap();
//! let organized = organize(cards, SortMode::Type);
//! assert_eq!(organized.categories.labels(), vec!["Instants"]);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod categorize;
pub mod client;
pub mod color;
pub mod config;
pub mod error;
pub mod faces;
pub mod models;
pub mod organize;

#[cfg(feature = "async")]
pub use async_client::AsyncScryfallSorter;
pub use categorize::{categorize, Categories, Category};
pub use client::{load_cards, parse_cards, ScryfallClient};
pub use color::{name_for, Color, ColorIdentity};
pub use error::{Result, SorterError};
pub use faces::{faces_of, Face, Faces};
pub use models::{Card, CardFace, CardView, Prices};
pub use organize::{organize, Organized, SortMode};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ScryfallSorterBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ScryfallSorter`].
///
/// Use [`ScryfallSorter::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ScryfallSorterBuilder::build).
#[derive(Debug, Clone)]
pub struct ScryfallSorterBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    page_delay: Duration,
}

impl Default for ScryfallSorterBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::default_user_agent(),
            page_delay: config::DEFAULT_PAGE_DELAY,
        }
    }
}

impl ScryfallSorterBuilder {
    /// Point the client at a different API host, such as a local mirror.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request HTTP timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header. Scryfall rejects requests without one.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the pause between page requests. Defaults to 100 ms.
    pub fn page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Build the sorter and its HTTP client. No request is made here.
    pub fn build(self) -> Result<ScryfallSorter> {
        if self.base_url.trim().is_empty() {
            return Err(SorterError::InvalidArgument(
                "Base URL must not be empty".to_string(),
            ));
        }
        let client = ScryfallClient::new(
            &self.base_url,
            self.timeout,
            &self.user_agent,
            self.page_delay,
        )?;
        Ok(ScryfallSorter { client })
    }
}

// ---------------------------------------------------------------------------
// ScryfallSorter
// ---------------------------------------------------------------------------

/// Search Scryfall and organize the results.
///
/// Holds no state between calls besides the HTTP client, so a single
/// instance can serve any number of independent searches.
pub struct ScryfallSorter {
    client: ScryfallClient,
}

impl ScryfallSorter {
    pub fn builder() -> ScryfallSorterBuilder {
        ScryfallSorterBuilder::default()
    }

    /// Fetch all cards whose oracle text matches `query`.
    pub fn search(&self, query: &str) -> Result<Vec<Card>> {
        self.client.search(query)
    }

    /// Fetch all cards matching `query` and group them by `mode`.
    ///
    /// A query with no matches yields empty categories.
    pub fn organize(&self, query: &str, mode: SortMode) -> Result<Organized> {
        let cards = self.client.search(query)?;
        Ok(organize::organize(cards, mode))
    }

    pub fn client(&self) -> &ScryfallClient {
        &self.client
    }
}

impl fmt::Display for ScryfallSorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScryfallSorter(search_url={})", self.client.search_url())
    }
}
