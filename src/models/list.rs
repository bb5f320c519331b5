use serde::{Deserialize, Serialize};

use super::Card;

// ---------------------------------------------------------------------------
// CardList — One page of search results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardList {
    #[serde(default)]
    pub data: Vec<Card>,
    #[serde(default)]
    pub has_more: bool,
    pub next_page: Option<String>,
    pub total_cards: Option<u64>,
}

// ---------------------------------------------------------------------------
// ApiError — Scryfall error object
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub code: String,
    #[serde(default)]
    pub details: String,
    pub warnings: Option<Vec<String>>,
}

impl ApiError {
    /// Scryfall reports a search with zero matches as `not_found`.
    pub fn is_not_found(&self) -> bool {
        self.code == "not_found"
    }
}
