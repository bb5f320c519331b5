//! Shared test fixtures for the scryfall-sorter integration tests.
//!
//! Cards are built from `serde_json::json!` literals shaped like Scryfall API
//! objects, so every fixture also exercises the model deserialization.

#![allow(dead_code)]

use scryfall_sorter::Card;
use serde_json::{json, Value};

/// Deserialize a single card from a JSON literal.
pub fn card(value: Value) -> Card {
    serde_json::from_value(value).unwrap()
}

/// A single-faced card with the fields classification looks at.
pub fn simple(name: &str, type_line: &str, cmc: f64, colors: &[&str], usd: Option<&str>) -> Card {
    card(json!({
        "name": name,
        "layout": "normal",
        "type_line": type_line,
        "cmc": cmc,
        "color_identity": colors,
        "prices": { "usd": usd },
    }))
}

/// A two-faced card with the given layout and per-face attributes.
pub fn double_faced(
    name: &str,
    layout: &str,
    front: (&str, f64, &[&str]),
    back: (&str, f64, &[&str]),
) -> Card {
    card(json!({
        "name": name,
        "layout": layout,
        "type_line": format!("{} // {}", front.0, back.0),
        "cmc": front.1,
        "color_identity": [],
        "card_faces": [
            { "name": "Front", "type_line": front.0, "cmc": front.1, "color_identity": front.2 },
            { "name": "Back", "type_line": back.0, "cmc": back.1, "color_identity": back.2 },
        ],
        "prices": { "usd": "1.50" },
    }))
}

pub fn lightning_bolt() -> Card {
    simple("Bolt", "Instant", 1.0, &["R"], Some("0.25"))
}

pub fn forest() -> Card {
    simple("Forest", "Basic Land \u{2014} Forest", 0.0, &[], None)
}

/// A realistic `transform` card as Scryfall returns it: faces carry
/// `colors` and images but no `color_identity`.
pub fn delver_of_secrets() -> Card {
    card(json!({
        "id": "11bf83bb-c95b-4b4f-9a56-ce7a1816307a",
        "name": "Delver of Secrets // Insectile Aberration",
        "layout": "transform",
        "type_line": "Creature \u{2014} Human Wizard // Creature \u{2014} Human Insect",
        "cmc": 1.0,
        "color_identity": ["U"],
        "card_faces": [
            {
                "name": "Delver of Secrets",
                "type_line": "Creature \u{2014} Human Wizard",
                "mana_cost": "{U}",
                "oracle_text": "At the beginning of your upkeep, look at the top card of your library.",
                "colors": ["U"],
                "image_uris": { "normal": "https://cards.scryfall.io/normal/front/delver.jpg" }
            },
            {
                "name": "Insectile Aberration",
                "type_line": "Creature \u{2014} Human Insect",
                "mana_cost": "",
                "oracle_text": "Flying",
                "colors": ["U"],
                "image_uris": { "normal": "https://cards.scryfall.io/normal/back/delver.jpg" }
            }
        ],
        "prices": { "usd": "0.12", "usd_foil": "1.10", "eur": null, "tix": "0.03" },
        "scryfall_uri": "https://scryfall.com/card/mid/47/delver-of-secrets-insectile-aberration"
    }))
}

pub fn names(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|c| c.name.as_str()).collect()
}
