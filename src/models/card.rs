use serde::{Deserialize, Serialize};

use crate::color::ColorIdentity;

/// Layouts whose two faces each carry their own type, cost and colors.
pub const DOUBLE_FACED_LAYOUTS: [&str; 2] = ["transform", "modal_dfc"];

// ---------------------------------------------------------------------------
// Card — A single Scryfall card object
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub layout: String,
    pub type_line: String,
    pub cmc: Option<f64>,
    pub mana_cost: Option<String>,
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub color_identity: ColorIdentity,
    pub card_faces: Option<Vec<CardFace>>,
    pub prices: Option<Prices>,
    pub scryfall_uri: Option<String>,
    pub image_uris: Option<ImageUris>,
}

impl Card {
    /// Mana value, `0` when Scryfall omits `cmc`.
    pub fn mana_value(&self) -> f64 {
        self.cmc.unwrap_or(0.0)
    }

    /// Card-level USD price, `0` when absent, null or unparseable.
    pub fn usd_price(&self) -> f64 {
        self.prices.as_ref().map(Prices::usd_amount).unwrap_or(0.0)
    }

    pub fn color_identity(&self) -> ColorIdentity {
        self.color_identity
    }

    /// True for `transform` and `modal_dfc` layouts.
    pub fn is_double_faced(&self) -> bool {
        DOUBLE_FACED_LAYOUTS.contains(&self.layout.as_str())
    }

    pub fn faces(&self) -> &[CardFace] {
        self.card_faces.as_deref().unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// CardFace — One printed side of a multi-faced card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub name: String,
    pub type_line: String,
    pub cmc: Option<f64>,
    pub mana_cost: Option<String>,
    pub oracle_text: Option<String>,
    pub color_identity: Option<ColorIdentity>,
    pub colors: Option<ColorIdentity>,
    pub image_uris: Option<ImageUris>,
}

impl CardFace {
    /// Mana value printed on this face: its `cmc`, else computed from its
    /// `mana_cost`. `None` when the face has neither.
    pub fn mana_value(&self) -> Option<f64> {
        self.cmc
            .or_else(|| self.mana_cost.as_deref().and_then(cost_mana_value))
    }
}

/// Mana value of a printed cost such as `{2}{U}{U}`.
///
/// Generic `{N}` counts N, `{X}`/`{Y}`/`{Z}` count 0, half-mana symbols
/// count 0.5, `{2/W}` counts 2, and every other symbol (colored, hybrid,
/// Phyrexian, snow, colorless) counts 1. An empty cost yields `None`.
pub fn cost_mana_value(cost: &str) -> Option<f64> {
    let cost = cost.trim();
    if cost.is_empty() {
        return None;
    }
    let value = cost
        .split('{')
        .filter_map(|part| part.split_once('}').map(|(symbol, _)| symbol))
        .map(symbol_mana_value)
        .sum();
    Some(value)
}

fn symbol_mana_value(symbol: &str) -> f64 {
    let symbol = symbol.trim().to_ascii_uppercase();
    if let Ok(n) = symbol.parse::<f64>() {
        return n;
    }
    match symbol.as_str() {
        "X" | "Y" | "Z" => 0.0,
        "½" | "1/2" => 0.5,
        s if s.starts_with('H') && s.len() == 2 => 0.5,
        s if s.starts_with("2/") => 2.0,
        _ => 1.0,
    }
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Prices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub eur: Option<String>,
    pub tix: Option<String>,
}

impl Prices {
    /// The `usd` amount as a number; missing or malformed text counts as `0`.
    pub fn usd_amount(&self) -> f64 {
        match self.usd.as_deref() {
            None => 0.0,
            Some(text) => text.trim().parse::<f64>().unwrap_or_else(|_| {
                tracing::warn!(price = text, "unparseable usd price, treating as 0");
                0.0
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ImageUris
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}
