//! Blocking Scryfall search client.
//!
//! Runs an oracle-text search and follows `next_page` links until the result
//! set is exhausted, returning every card in API delivery order. Requests are
//! made one after another with a short pause between pages; there are no
//! retries.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;

use crate::config;
use crate::error::{Result, SorterError};
use crate::models::{ApiError, Card, CardList};

/// Pages through `/cards/search` results.
pub struct ScryfallClient {
    http: Client,
    search_url: String,
    page_delay: Duration,
}

impl ScryfallClient {
    /// Create a client against `base_url` (e.g. [`config::API_BASE`]).
    pub fn new(
        base_url: &str,
        timeout: Duration,
        user_agent: &str,
        page_delay: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(accept_json())
            .build()?;
        Ok(Self {
            http,
            search_url: config::search_url(base_url),
            page_delay,
        })
    }

    /// The search endpoint this client queries.
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Fetch every card whose rules text matches `query`, one printing per card.
    ///
    /// A search with no matches returns an empty vector rather than an error.
    pub fn search(&self, query: &str) -> Result<Vec<Card>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SorterError::InvalidArgument(
                "Search query must not be empty".to_string(),
            ));
        }

        let q = config::oracle_query(query);
        let first = self
            .http
            .get(&self.search_url)
            .query(&[("q", q.as_str()), ("unique", "cards")]);

        let mut page = match self.fetch_page(first)? {
            Some(page) => page,
            None => {
                tracing::info!(query = %q, "no cards matched");
                return Ok(Vec::new());
            }
        };

        let mut cards = Vec::with_capacity(page.total_cards.unwrap_or(0) as usize);
        let mut pages = 1usize;
        loop {
            tracing::debug!(page = pages, cards = page.data.len(), "fetched search page");
            cards.append(&mut page.data);

            let Some(next) = page.next_page.take() else {
                break;
            };
            if !self.page_delay.is_zero() {
                thread::sleep(self.page_delay);
            }
            // Only the first page may report `not_found`; later it means the
            // result set changed mid-search, and partial results are not returned.
            page = self
                .fetch_page(self.http.get(&next))?
                .ok_or_else(|| SorterError::Api {
                    status: 404,
                    code: "not_found".to_string(),
                    details: format!("Result page {} disappeared mid-search: {}", pages + 1, next),
                })?;
            pages += 1;
        }

        tracing::info!(query = %q, pages, cards = cards.len(), "search complete");
        Ok(cards)
    }

    /// Send one page request. `Ok(None)` means Scryfall reported `not_found`.
    fn fetch_page(&self, request: RequestBuilder) -> Result<Option<CardList>> {
        let resp = request.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(Some(resp.json()?));
        }

        let body = resp.text()?;
        match api_error(status.as_u16(), &body) {
            None => Ok(None),
            Some(err) => Err(err),
        }
    }
}

fn accept_json() -> reqwest::header::HeaderMap {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );
    headers
}

/// Interpret a non-success response body. Returns `None` for `not_found`,
/// which Scryfall uses to signal an empty result set.
pub fn api_error(status: u16, body: &str) -> Option<SorterError> {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) if err.is_not_found() => None,
        Ok(err) => Some(SorterError::Api {
            status: err.status,
            code: err.code,
            details: err.details,
        }),
        Err(_) => Some(SorterError::Api {
            status,
            code: "unknown".to_string(),
            details: body.trim().to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Offline input
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum SavedCards {
    Bare(Vec<Card>),
    Page(CardList),
}

/// Parse cards from JSON text holding a bare array of cards or a saved
/// search page (`{"object": "list", "data": [...]}`).
pub fn parse_cards(json: &str) -> Result<Vec<Card>> {
    let saved: SavedCards = serde_json::from_str(json)?;
    Ok(match saved {
        SavedCards::Bare(cards) => cards,
        SavedCards::Page(page) => page.data,
    })
}

/// Load cards from a JSON file on disk; see [`parse_cards`].
pub fn load_cards<P: AsRef<Path>>(path: P) -> Result<Vec<Card>> {
    let contents = fs::read_to_string(path.as_ref())?;
    let cards = parse_cards(&contents)?;
    tracing::debug!(path = %path.as_ref().display(), cards = cards.len(), "loaded saved cards");
    Ok(cards)
}
