//! Color identity parsing and archetype naming.

use scryfall_sorter::{name_for, Color, ColorIdentity};

fn ident(codes: &str) -> ColorIdentity {
    codes.parse().unwrap()
}

// ---------------------------------------------------------------------------
// ColorIdentity
// ---------------------------------------------------------------------------

#[test]
fn duplicate_codes_collapse() {
    let identity = ident("WWUW");
    assert_eq!(identity.len(), 2);
    assert_eq!(identity, ident("UW"));
}

#[test]
fn colors_iterate_in_wubrg_order() {
    let identity = ident("G, r, W");
    let colors: Vec<Color> = identity.colors().collect();
    assert_eq!(colors, vec![Color::White, Color::Red, Color::Green]);
    assert_eq!(identity.codes(), "WRG");
}

#[test]
fn unknown_code_is_rejected() {
    assert!("WX".parse::<ColorIdentity>().is_err());
}

#[test]
fn union_merges_sets() {
    let merged = ident("WU").union(ident("UB"));
    assert_eq!(merged, ident("WUB"));
    assert!(merged.contains(Color::Black));
    assert!(!merged.contains(Color::Green));
}

#[test]
fn deserializes_from_json_array_with_duplicates() {
    let identity: ColorIdentity = serde_json::from_str(r#"["G", "W", "G"]"#).unwrap();
    assert_eq!(identity, ident("WG"));
    assert_eq!(serde_json::to_string(&identity).unwrap(), r#"["W","G"]"#);
}

#[test]
fn color_codes_and_names() {
    let pairs: Vec<(char, &str)> = Color::ALL.iter().map(|c| (c.code(), c.name())).collect();
    assert_eq!(
        pairs,
        vec![('W', "White"), ('U', "Blue"), ('B', "Black"), ('R', "Red"), ('G', "Green")]
    );
    for color in Color::ALL {
        assert_eq!(Color::from_code(color.code()), Some(color));
    }
}

#[test]
fn insert_is_idempotent() {
    let mut identity = ColorIdentity::COLORLESS;
    identity.insert(Color::Red);
    identity.insert(Color::Red);
    assert_eq!(identity.len(), 1);
    assert!(identity.contains(Color::Red));
}

// ---------------------------------------------------------------------------
// name_for
// ---------------------------------------------------------------------------

#[test]
fn colorless_and_mono_names() {
    assert_eq!(name_for(ColorIdentity::COLORLESS), "Colorless");
    assert_eq!(name_for(ident("W")), "White");
    assert_eq!(name_for(ident("U")), "Blue");
    assert_eq!(name_for(ident("B")), "Black");
    assert_eq!(name_for(ident("R")), "Red");
    assert_eq!(name_for(ident("G")), "Green");
}

#[test]
fn all_guilds_named_regardless_of_order() {
    let guilds = [
        ("WU", "Azorius (White/Blue)"),
        ("UB", "Dimir (Blue/Black)"),
        ("UR", "Izzet (Blue/Red)"),
        ("UG", "Simic (Blue/Green)"),
        ("BR", "Rakdos (Black/Red)"),
        ("BG", "Golgari (Black/Green)"),
        ("WB", "Orzhov (White/Black)"),
        ("WR", "Boros (White/Red)"),
        ("WG", "Selesnya (White/Green)"),
        ("RG", "Gruul (Red/Green)"),
    ];
    for (codes, expected) in guilds {
        let reversed: String = codes.chars().rev().collect();
        assert_eq!(name_for(ident(codes)), expected, "{}", codes);
        assert_eq!(name_for(ident(&reversed)), expected, "{}", reversed);
    }
}

#[test]
fn all_shards_and_wedges_named_regardless_of_order() {
    let triples = [
        ("WUB", "Esper (White/Blue/Black)"),
        ("UBR", "Grixis (Blue/Black/Red)"),
        ("BRG", "Jund (Black/Red/Green)"),
        ("WRG", "Naya (White/Red/Green)"),
        ("WUG", "Bant (White/Blue/Green)"),
        ("WBG", "Abzan (White/Black/Green)"),
        ("WUR", "Jeskai (White/Blue/Red)"),
        ("WBR", "Mardu (White/Black/Red)"),
        ("UBG", "Sultai (Blue/Black/Green)"),
        ("URG", "Temur (Blue/Red/Green)"),
    ];
    for (codes, expected) in triples {
        let reversed: String = codes.chars().rev().collect();
        assert_eq!(name_for(ident(codes)), expected, "{}", codes);
        assert_eq!(name_for(ident(&reversed)), expected, "{}", reversed);
    }
}

#[test]
fn four_color_lists_members_canonically() {
    assert_eq!(name_for(ident("GRBU")), "Four-Color (Blue/Black/Red/Green)");
    assert_eq!(name_for(ident("WURG")), "Four-Color (White/Blue/Red/Green)");
}

#[test]
fn five_color() {
    assert_eq!(name_for(ident("GRBUW")), "Five-Color (WUBRG)");
}

#[test]
fn every_subset_has_a_name() {
    for bits in 0u8..32 {
        let identity: ColorIdentity = Color::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| bits & (1u8 << *i) != 0)
            .map(|(_, c)| *c)
            .collect();
        let name = name_for(identity);
        assert!(!name.is_empty());
        assert_eq!(name, identity.archetype_name());
    }
}
