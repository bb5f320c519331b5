//! Smoke test against the live Scryfall API.
//!
//! Runs real searches and exercises every sort mode on the results.
//!
//! Run with:
//! ```sh
//! cargo test -- --ignored --nocapture
//! ```

use scryfall_sorter::{CardView, ScryfallSorter, SortMode};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Print a section header to stderr.
fn section(name: &str) {
    eprintln!("\n{}", "=".repeat(60));
    eprintln!("  {}", name);
    eprintln!("{}", "=".repeat(60));
}

/// Counters for pass/fail reporting.
struct Counters {
    pass: usize,
    fail: usize,
}

impl Counters {
    fn new() -> Self {
        Self { pass: 0, fail: 0 }
    }

    fn check(&mut self, label: &str, condition: bool, detail: &str) {
        let status = if condition { "PASS" } else { "FAIL" };
        if condition {
            self.pass += 1;
        } else {
            self.fail += 1;
        }
        if detail.is_empty() {
            eprintln!("  [{}] {}", status, label);
        } else {
            eprintln!("  [{}] {} -- {}", status, label, detail);
        }
    }
}

// ---------------------------------------------------------------------------
// Main smoke test
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn smoke_test() {
    let sorter = ScryfallSorter::builder().build().unwrap();
    let mut c = Counters::new();

    // ================================================================
    // 1. SEARCH (multi-page)
    // ================================================================
    section("Search");

    let cards = sorter.search("transform").unwrap();
    c.check(
        "search returns cards",
        cards.len() > 175,
        &format!("found {} cards (more than one page)", cards.len()),
    );
    c.check(
        "results include double-faced cards",
        cards.iter().any(|card| card.is_double_faced()),
        "",
    );

    let none = sorter.search("zzqxjvwk-no-such-text").unwrap();
    c.check("unmatched query is empty", none.is_empty(), "");

    // ================================================================
    // 2. ORGANIZE (every mode)
    // ================================================================
    section("Organize");

    for mode in SortMode::ALL {
        let organized = scryfall_sorter::organize(cards.clone(), mode);
        c.check(
            &format!("{} keeps every card", mode.label()),
            organized.card_count() == cards.len(),
            &format!(
                "{} categories: {:?}",
                organized.category_count(),
                organized.categories.labels()
            ),
        );
    }

    // ================================================================
    // 3. VIEWS
    // ================================================================
    section("Views");

    let with_image = cards
        .iter()
        .map(CardView::from)
        .filter(|view| view.image.is_some())
        .count();
    c.check(
        "most cards have a display image",
        with_image * 10 >= cards.len() * 9,
        &format!("{}/{}", with_image, cards.len()),
    );

    // ================================================================
    // SUMMARY
    // ================================================================
    section("SMOKE TEST COMPLETE");

    eprintln!("  Passed:  {}", c.pass);
    eprintln!("  Failed:  {}", c.fail);
    eprintln!();

    assert_eq!(c.fail, 0, "{} smoke test checks failed", c.fail);
}
