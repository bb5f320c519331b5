use std::time::Duration;

pub const API_BASE: &str = "https://api.scryfall.com";
pub const SEARCH_PATH: &str = "/cards/search";

/// Scryfall asks clients to keep to roughly ten requests per second.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub fn default_user_agent() -> String {
    format!("scryfall-sorter/{}", env!("CARGO_PKG_VERSION"))
}

/// Full search endpoint for a base URL, tolerating a trailing slash.
pub fn search_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), SEARCH_PATH)
}

/// Scryfall search syntax for an oracle-text substring query.
///
/// Multi-word text is quoted so it matches as one phrase; text that already
/// carries quotes is passed through untouched.
pub fn oracle_query(text: &str) -> String {
    if text.contains(char::is_whitespace) && !text.contains('"') {
        format!("o:\"{}\"", text)
    } else {
        format!("o:{}", text)
    }
}
