mod error;
mod model;

pub use error::ApiError;
pub use model::{SongRecord, SongsResponse};

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error};

use crate::config::ApiConfig;

pub struct ApiService {
    client: Client,
    endpoint: String,
    asset_base: String,
}

impl ApiService {
    pub fn new(config: &ApiConfig) -> color_eyre::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            asset_base: config.asset_base.clone(),
        })
    }

    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    /// Fetches the song catalog, yielding an empty list on any failure.
    pub async fn fetch_songs(&self) -> Vec<SongRecord> {
        match self.try_fetch_songs().await {
            Ok(songs) => songs,
            Err(e) => {
                error!("Error fetching music data: {e}");
                Vec::new()
            }
        }
    }

    pub async fn try_fetch_songs(&self) -> Result<Vec<SongRecord>, ApiError> {
        debug!("GET {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: SongsResponse = serde_json::from_slice(&body)?;
        Ok(parsed.data)
    }

    /// Downloads a whole audio resource into memory.
    pub async fn fetch_audio(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests;
