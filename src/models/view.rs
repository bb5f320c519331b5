use serde::Serialize;

use super::Card;

// ---------------------------------------------------------------------------
// CardView — What a gallery tile and its detail panel display
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub name: String,
    pub type_line: String,
    pub mana_cost: String,
    pub mana_value: f64,
    pub oracle_text: String,
    pub scryfall_uri: Option<String>,
    /// `None` means the UI should draw its "no image" placeholder.
    pub image: Option<String>,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        let front = card.faces().first();
        Self {
            name: card.name.clone(),
            type_line: card.type_line.clone(),
            mana_cost: card
                .mana_cost
                .clone()
                .or_else(|| front.and_then(|f| f.mana_cost.clone()))
                .unwrap_or_default(),
            mana_value: card.mana_value(),
            oracle_text: card
                .oracle_text
                .clone()
                .or_else(|| front.and_then(|f| f.oracle_text.clone()))
                .unwrap_or_default(),
            scryfall_uri: card.scryfall_uri.clone(),
            image: display_image(card),
        }
    }
}

/// The card's own image, else its first face's image.
pub fn display_image(card: &Card) -> Option<String> {
    card.image_uris
        .as_ref()
        .and_then(|u| u.normal.clone())
        .or_else(|| {
            card.faces()
                .first()
                .and_then(|f| f.image_uris.as_ref())
                .and_then(|u| u.normal.clone())
        })
}
