//! Bucketers: partition a card list into labeled categories.
//!
//! Each sort mode has a per-card label function and a whole-list bucketer.
//! Buckets keep the order in which their labels were first seen, and cards
//! inside a bucket keep their input order.

use serde::Serialize;

use crate::color::{name_for, ColorIdentity};
use crate::faces::faces_of;
use crate::models::Card;
use crate::organize::SortMode;

/// Type keywords in precedence order, paired with their bucket label.
/// An artifact creature is a creature because `Creature` is checked first.
pub const TYPE_PRECEDENCE: [(&str, &str); 8] = [
    ("Creature", "Creatures"),
    ("Artifact", "Artifacts"),
    ("Enchantment", "Enchantments"),
    ("Instant", "Instants"),
    ("Sorcery", "Sorceries"),
    ("Planeswalker", "Planeswalkers"),
    ("Land", "Lands"),
    ("Battle", "Battles"),
];

pub const OTHER_LABEL: &str = "Other";
pub const LANDS_LABEL: &str = "Lands";

const MANA_LABELS: [&str; 7] = [
    "0 Mana", "1 Mana", "2 Mana", "3 Mana", "4 Mana", "5 Mana", "6 Mana",
];
pub const HIGH_MANA_LABEL: &str = "7+ Mana";

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// One labeled bucket of cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub label: String,
    pub cards: Vec<Card>,
}

/// Insertion-ordered mapping from bucket label to cards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Categories {
    buckets: Vec<Category>,
}

impl Categories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `card` to the bucket for `label`, creating it at the end if new.
    pub fn push(&mut self, label: &str, card: Card) {
        match self.buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.cards.push(card),
            None => self.buckets.push(Category {
                label: label.to_string(),
                cards: vec![card],
            }),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[Card]> {
        self.buckets
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.cards.as_slice())
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.buckets.iter()
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total cards across all buckets.
    pub fn card_count(&self) -> usize {
        self.buckets.iter().map(|b| b.cards.len()).sum()
    }
}

impl IntoIterator for Categories {
    type Item = Category;
    type IntoIter = std::vec::IntoIter<Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<'a> IntoIterator for &'a Categories {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

// ---------------------------------------------------------------------------
// Per-card labels
// ---------------------------------------------------------------------------

/// Type bucket: the first keyword in [`TYPE_PRECEDENCE`] found on either face.
pub fn type_category(card: &Card) -> &'static str {
    let faces = faces_of(card);
    TYPE_PRECEDENCE
        .iter()
        .find(|(keyword, _)| faces.any_type_contains(keyword))
        .map(|(_, label)| *label)
        .unwrap_or(OTHER_LABEL)
}

/// Identity used for color bucketing: the front face's, or the union of
/// both faces' when the back face differs.
pub fn combined_color_identity(card: &Card) -> ColorIdentity {
    let faces = faces_of(card);
    let front = faces.front.color_identity();
    match faces.back.map(|back| back.color_identity()) {
        Some(back) if back != front => front.union(back),
        _ => front,
    }
}

/// Color bucket: `Lands` for any land face, otherwise the archetype name.
pub fn color_category(card: &Card) -> String {
    if faces_of(card).any_type_contains("Land") {
        return LANDS_LABEL.to_string();
    }
    name_for(combined_color_identity(card))
}

/// Mana value used for mana bucketing: the larger of the two faces.
pub fn effective_mana_value(card: &Card) -> f64 {
    faces_of(card)
        .iter()
        .map(|face| face.mana_value())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Mana bucket by exact numeric match against 0 through 6.
///
/// A fractional value such as `0.5` equals none of the thresholds and
/// therefore lands in `7+ Mana`.
pub fn mana_category(card: &Card) -> &'static str {
    let mana = effective_mana_value(card);
    MANA_LABELS
        .iter()
        .enumerate()
        .find(|(n, _)| mana == *n as f64)
        .map(|(_, label)| *label)
        .unwrap_or(HIGH_MANA_LABEL)
}

/// Price bucket from the card-level `prices.usd`, with inclusive upper bounds.
pub fn price_category(card: &Card) -> &'static str {
    let price = card.usd_price();
    if price == 0.0 {
        "$0 (No Price)"
    } else if price <= 0.50 {
        "$0.50 or less"
    } else if price <= 1.00 {
        "$0.51 to $1.00"
    } else if price <= 5.00 {
        "$1.01 to $5.00"
    } else {
        "$5.01 or more"
    }
}

// ---------------------------------------------------------------------------
// Bucketers
// ---------------------------------------------------------------------------

fn bucket_with<F, L>(cards: Vec<Card>, label_for: F) -> Categories
where
    F: Fn(&Card) -> L,
    L: AsRef<str>,
{
    let mut categories = Categories::new();
    for card in cards {
        let label = label_for(&card);
        categories.push(label.as_ref(), card);
    }
    categories
}

pub fn by_type(cards: Vec<Card>) -> Categories {
    bucket_with(cards, type_category)
}

pub fn by_color(cards: Vec<Card>) -> Categories {
    bucket_with(cards, color_category)
}

pub fn by_mana(cards: Vec<Card>) -> Categories {
    bucket_with(cards, mana_category)
}

pub fn by_price(cards: Vec<Card>) -> Categories {
    bucket_with(cards, price_category)
}

/// Bucket `cards` in their given order using the bucketer for `mode`.
pub fn categorize(cards: Vec<Card>, mode: SortMode) -> Categories {
    match mode {
        SortMode::Type => by_type(cards),
        SortMode::Color => by_color(cards),
        SortMode::Mana => by_mana(cards),
        SortMode::Price => by_price(cards),
    }
}
