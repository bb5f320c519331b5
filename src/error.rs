#[derive(Debug, thiserror::Error)]
pub enum SorterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scryfall API error ({status} {code}): {details}")]
    Api {
        status: u16,
        code: String,
        details: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SorterError>;
