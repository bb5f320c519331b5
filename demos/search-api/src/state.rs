/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async sorter. Dispatches blocking Scryfall requests to a thread
    /// pool internally; each search is independent.
    pub sorter: scryfall_sorter::AsyncScryfallSorter,
}
