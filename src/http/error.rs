use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
