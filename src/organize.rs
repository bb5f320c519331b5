//! Sort orchestrator: pre-sort a card list and bucket it by one sort mode.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::categorize::{categorize, Categories};
use crate::color::name_for;
use crate::models::Card;

// ---------------------------------------------------------------------------
// SortMode
// ---------------------------------------------------------------------------

/// The four ways a result list can be grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Type,
    Color,
    Mana,
    Price,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Type,
        SortMode::Color,
        SortMode::Mana,
        SortMode::Price,
    ];

    /// Parse a mode key. Unrecognized keys fall back to [`SortMode::Type`].
    pub fn parse(key: &str) -> SortMode {
        match key.trim().to_ascii_lowercase().as_str() {
            "color" => SortMode::Color,
            "mana" => SortMode::Mana,
            "price" => SortMode::Price,
            _ => SortMode::Type,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortMode::Type => "type",
            SortMode::Color => "color",
            SortMode::Mana => "mana",
            SortMode::Price => "price",
        }
    }

    /// Display label for the active mode.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Type => "Type",
            SortMode::Color => "Color",
            SortMode::Mana => "Mana Cost",
            SortMode::Price => "Price",
        }
    }

    /// Ordering used for the stable pre-sort.
    fn compare(self, a: &Card, b: &Card) -> Ordering {
        match self {
            SortMode::Type => a.type_line.cmp(&b.type_line),
            SortMode::Color => {
                name_for(a.color_identity()).cmp(&name_for(b.color_identity()))
            }
            SortMode::Mana => a.mana_value().total_cmp(&b.mana_value()),
            SortMode::Price => a.usd_price().total_cmp(&b.usd_price()),
        }
    }
}

impl From<&str> for SortMode {
    fn from(key: &str) -> Self {
        SortMode::parse(key)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Organized
// ---------------------------------------------------------------------------

/// Bucketed results plus what the presentation layer needs to show them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organized {
    pub sort_mode: SortMode,
    pub categories: Categories,
}

impl Organized {
    pub fn sort_label(&self) -> &'static str {
        self.sort_mode.label()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn card_count(&self) -> usize {
        self.categories.card_count()
    }

    /// False when the search produced nothing to show.
    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }
}

/// Stably sort `cards` by the mode's criterion, then bucket them.
///
/// An empty list yields empty categories.
pub fn organize(mut cards: Vec<Card>, mode: SortMode) -> Organized {
    cards.sort_by(|a, b| mode.compare(a, b));
    let categories = categorize(cards, mode);
    tracing::info!(
        sort_mode = mode.key(),
        categories = categories.len(),
        cards = categories.card_count(),
        "organized cards"
    );
    Organized {
        sort_mode: mode,
        categories,
    }
}
