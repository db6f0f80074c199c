use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{source_name} returned HTTP {status} for '{term}' page {page}")]
    HttpStatus {
        source_name: &'static str,
        term: String,
        page: u64,
        status: reqwest::StatusCode,
    },

    #[error("malformed {source_name} response: {detail}")]
    MalformedResponse {
        source_name: &'static str,
        detail: String,
    },

    #[error("gave up on '{term}' page {page} after {attempts} connection attempts")]
    RetryExhausted {
        term: String,
        page: u64,
        attempts: u32,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, StatsError>;
