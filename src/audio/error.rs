use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AudioError {
    #[error("Audio output device error: {0}")]
    DeviceError(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Seek error: {0}")]
    SeekError(String),

    #[error("Probe timed out after {0:?}")]
    ProbeTimeout(Duration),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
