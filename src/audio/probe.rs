use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rodio::{Decoder, Source};

use crate::{audio::error::AudioError, http::ApiService};

/// Reads the decoded length of a media resource without playing it.
#[async_trait]
pub trait DurationProbe: Send + Sync {
    async fn probe(&self, url: &str) -> Result<f64, AudioError>;
}

/// Downloads the resource and decodes it off the async runtime. The timeout
/// covers the download.
pub struct HttpDurationProbe {
    api: Arc<ApiService>,
    timeout: Duration,
}

impl HttpDurationProbe {
    pub fn new(api: Arc<ApiService>, timeout: Duration) -> Self {
        Self { api, timeout }
    }
}

#[async_trait]
impl DurationProbe for HttpDurationProbe {
    async fn probe(&self, url: &str) -> Result<f64, AudioError> {
        let bytes = tokio::time::timeout(self.timeout, self.api.fetch_audio(url))
            .await
            .map_err(|_| AudioError::ProbeTimeout(self.timeout))?
            .map_err(|e| AudioError::NetworkError(e.to_string()))?;

        // a blocking decode cannot be cancelled; it is bounded by the buffer it owns
        tokio::task::spawn_blocking(move || decode_duration(bytes))
            .await
            .map_err(|e| AudioError::Unknown(e.to_string()))?
    }
}

/// Length in seconds of an encoded buffer. Falls back to counting samples
/// when the container does not carry a total duration.
pub fn decode_duration(bytes: Vec<u8>) -> Result<f64, AudioError> {
    let decoder =
        Decoder::new(Cursor::new(bytes)).map_err(|e| AudioError::DecodingError(e.to_string()))?;

    if let Some(total) = decoder.total_duration() {
        return Ok(total.as_secs_f64());
    }

    let rate = decoder.sample_rate() as f64;
    let channels = decoder.channels() as f64;
    if rate <= 0.0 || channels <= 0.0 {
        return Err(AudioError::DecodingError(
            "stream reports no sample rate".to_string(),
        ));
    }

    let samples = decoder.count() as f64;
    Ok(samples / (rate * channels))
}
