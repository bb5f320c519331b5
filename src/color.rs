//! Colors, color identities, and their archetype names.
//!
//! A [`ColorIdentity`] is a set of the five Magic colors stored as a bit set,
//! so duplicate codes collapse and input order never matters. Iteration is
//! always in the canonical W, U, B, R, G order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SorterError;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// One of the five colors of Magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// All colors in canonical WUBRG order.
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Parse a one-letter code (case-insensitive).
    pub fn from_code(code: char) -> Option<Color> {
        match code.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            _ => None,
        }
    }

    /// One-letter code, e.g. `U` for blue.
    pub fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Full color name, e.g. `Blue`.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Blue => "Blue",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Blue => 1 << 1,
            Color::Black => 1 << 2,
            Color::Red => 1 << 3,
            Color::Green => 1 << 4,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// ColorIdentity
// ---------------------------------------------------------------------------

/// A deduplicated, order-insensitive set of colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorIdentity(u8);

impl ColorIdentity {
    /// The empty (colorless) identity.
    pub const COLORLESS: ColorIdentity = ColorIdentity(0);

    /// Build an identity from a fixed list of colors. Usable in constants.
    pub const fn of(colors: &[Color]) -> ColorIdentity {
        let mut bits = 0u8;
        let mut i = 0;
        while i < colors.len() {
            bits |= colors[i].bit();
            i += 1;
        }
        ColorIdentity(bits)
    }

    /// True if `color` is part of this identity.
    pub fn contains(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    /// Add `color`; adding a color already present is a no-op.
    pub fn insert(&mut self, color: Color) {
        self.0 |= color.bit();
    }

    /// Every color in either identity.
    pub fn union(self, other: ColorIdentity) -> ColorIdentity {
        ColorIdentity(self.0 | other.0)
    }

    /// Number of distinct colors (0 through 5).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True for a colorless identity.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Colors in canonical WUBRG order.
    pub fn colors(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// One-letter codes in canonical order, e.g. `"WU"`.
    pub fn codes(self) -> String {
        self.colors().map(Color::code).collect()
    }

    /// The archetype display name; see [`name_for`].
    pub fn archetype_name(self) -> String {
        name_for(self)
    }
}

impl FromIterator<Color> for ColorIdentity {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut identity = ColorIdentity::COLORLESS;
        for color in iter {
            identity.insert(color);
        }
        identity
    }
}

impl FromStr for ColorIdentity {
    type Err = SorterError;

    /// Parse letter codes such as `"WU"`, `"u, w"` or `"G"`. Commas,
    /// slashes and whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '/')
            .map(|c| {
                Color::from_code(c).ok_or_else(|| {
                    SorterError::InvalidArgument(format!("Unknown color code: {}", c))
                })
            })
            .collect()
    }
}

impl fmt::Display for ColorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.codes())
    }
}

impl Serialize for ColorIdentity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.colors())
    }
}

impl<'de> Deserialize<'de> for ColorIdentity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let colors = Vec::<Color>::deserialize(deserializer)?;
        Ok(colors.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Archetype naming
// ---------------------------------------------------------------------------

use self::Color::{Black as B, Blue as U, Green as G, Red as R, White as W};

/// The ten two-color guilds.
static GUILDS: [(ColorIdentity, &str); 10] = [
    (ColorIdentity::of(&[W, U]), "Azorius"),
    (ColorIdentity::of(&[U, B]), "Dimir"),
    (ColorIdentity::of(&[U, R]), "Izzet"),
    (ColorIdentity::of(&[U, G]), "Simic"),
    (ColorIdentity::of(&[B, R]), "Rakdos"),
    (ColorIdentity::of(&[B, G]), "Golgari"),
    (ColorIdentity::of(&[W, B]), "Orzhov"),
    (ColorIdentity::of(&[W, R]), "Boros"),
    (ColorIdentity::of(&[W, G]), "Selesnya"),
    (ColorIdentity::of(&[R, G]), "Gruul"),
];

/// The five shards and five wedges.
static SHARDS_AND_WEDGES: [(ColorIdentity, &str); 10] = [
    (ColorIdentity::of(&[W, U, B]), "Esper"),
    (ColorIdentity::of(&[U, B, R]), "Grixis"),
    (ColorIdentity::of(&[B, R, G]), "Jund"),
    (ColorIdentity::of(&[W, R, G]), "Naya"),
    (ColorIdentity::of(&[W, U, G]), "Bant"),
    (ColorIdentity::of(&[W, B, G]), "Abzan"),
    (ColorIdentity::of(&[W, U, R]), "Jeskai"),
    (ColorIdentity::of(&[W, B, R]), "Mardu"),
    (ColorIdentity::of(&[U, B, G]), "Sultai"),
    (ColorIdentity::of(&[U, R, G]), "Temur"),
];

fn lookup(table: &[(ColorIdentity, &'static str)], identity: ColorIdentity) -> Option<&'static str> {
    table
        .iter()
        .find(|(entry, _)| *entry == identity)
        .map(|(_, name)| *name)
}

fn slash_joined(identity: ColorIdentity) -> String {
    identity.colors().map(Color::name).collect::<Vec<_>>().join("/")
}

/// Human-readable archetype name for a color identity.
///
/// | colors | result                                    |
/// |--------|-------------------------------------------|
/// | 0      | `Colorless`                               |
/// | 1      | `White`, `Blue`, ...                      |
/// | 2      | `Azorius (White/Blue)`, ...               |
/// | 3      | `Esper (White/Blue/Black)`, ...           |
/// | 4      | `Four-Color (White/Blue/Black/Red)`, ...  |
/// | 5      | `Five-Color (WUBRG)`                      |
pub fn name_for(identity: ColorIdentity) -> String {
    match identity.len() {
        0 => "Colorless".to_string(),
        1 => slash_joined(identity),
        2 => match lookup(&GUILDS, identity) {
            Some(guild) => format!("{} ({})", guild, slash_joined(identity)),
            None => slash_joined(identity),
        },
        3 => match lookup(&SHARDS_AND_WEDGES, identity) {
            Some(name) => format!("{} ({})", name, slash_joined(identity)),
            None => slash_joined(identity),
        },
        4 => format!("Four-Color ({})", slash_joined(identity)),
        _ => "Five-Color (WUBRG)".to_string(),
    }
}
