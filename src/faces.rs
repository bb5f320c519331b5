//! Card normalizer: resolve the face or faces that classification looks at.
//!
//! Only `transform` and `modal_dfc` cards are split into two faces. Every
//! other card, including split and adventure cards that also carry
//! `card_faces`, is classified as a single face using its card-level fields.

use crate::color::ColorIdentity;
use crate::models::{Card, CardFace, ImageUris};

// ---------------------------------------------------------------------------
// Face
// ---------------------------------------------------------------------------

/// A borrowed view of one side of a card.
#[derive(Debug, Clone, Copy)]
pub enum Face<'a> {
    /// The card itself, for single-faced layouts.
    Whole(&'a Card),
    /// One printed side of a double-faced card, with its parent for fallbacks.
    Side { face: &'a CardFace, card: &'a Card },
}

impl<'a> Face<'a> {
    pub fn type_line(&self) -> &'a str {
        match *self {
            Face::Whole(card) => &card.type_line,
            Face::Side { face, .. } => &face.type_line,
        }
    }

    /// Face mana value. Scryfall omits `cmc` on transform and modal faces,
    /// so it is computed from the face's `mana_cost`; a face with no cost
    /// at all inherits the card's.
    pub fn mana_value(&self) -> f64 {
        match *self {
            Face::Whole(card) => card.mana_value(),
            Face::Side { face, card } => face.mana_value().unwrap_or_else(|| card.mana_value()),
        }
    }

    /// Face color identity. Scryfall prints `colors` rather than
    /// `color_identity` on faces, so fall back to that, then to the card.
    pub fn color_identity(&self) -> ColorIdentity {
        match *self {
            Face::Whole(card) => card.color_identity(),
            Face::Side { face, card } => face
                .color_identity
                .or(face.colors)
                .unwrap_or_else(|| card.color_identity()),
        }
    }

    pub fn image_uris(&self) -> Option<&'a ImageUris> {
        match *self {
            Face::Whole(card) => card.image_uris.as_ref(),
            Face::Side { face, .. } => face.image_uris.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Faces
// ---------------------------------------------------------------------------

/// The front face and, for double-faced cards, the back face.
#[derive(Debug, Clone, Copy)]
pub struct Faces<'a> {
    pub front: Face<'a>,
    pub back: Option<Face<'a>>,
}

impl<'a> Faces<'a> {
    /// Front face first, then the back face when present.
    pub fn iter(&self) -> impl Iterator<Item = Face<'a>> {
        std::iter::once(self.front).chain(self.back)
    }

    /// True if either face's type line contains `keyword`.
    pub fn any_type_contains(&self, keyword: &str) -> bool {
        self.iter().any(|face| face.type_line().contains(keyword))
    }
}

/// Split a card into the faces used for classification.
pub fn faces_of(card: &Card) -> Faces<'_> {
    let faces = card.faces();
    if card.is_double_faced() && !faces.is_empty() {
        Faces {
            front: Face::Side {
                face: &faces[0],
                card,
            },
            back: faces.get(1).map(|face| Face::Side { face, card }),
        }
    } else {
        Faces {
            front: Face::Whole(card),
            back: None,
        }
    }
}
