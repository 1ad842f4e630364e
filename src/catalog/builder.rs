use thiserror::Error;
use tracing::{info, warn};

use super::{Song, resolve_cover};
use crate::{
    audio::{error::AudioError, probe::DurationProbe},
    config::ProbeFailurePolicy,
    http::SongRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildProgress {
    pub probed: usize,
    pub total: usize,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to probe \"{name}\": {source}")]
    Probe { name: String, source: AudioError },
}

/// Joins fetched records with their probed durations, one record at a time.
pub struct CatalogBuilder<'a> {
    probe: &'a dyn DurationProbe,
    asset_base: &'a str,
    on_failure: ProbeFailurePolicy,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(probe: &'a dyn DurationProbe, asset_base: &'a str) -> Self {
        Self {
            probe,
            asset_base,
            on_failure: ProbeFailurePolicy::default(),
        }
    }

    pub fn on_failure(mut self, policy: ProbeFailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Probes every record in order, awaiting each probe before the next one
    /// starts. Indices are assigned sequentially from zero.
    pub async fn build<F>(
        &self,
        records: Vec<SongRecord>,
        mut on_progress: F,
    ) -> Result<Vec<Song>, CatalogError>
    where
        F: FnMut(BuildProgress) + Send,
    {
        let total = records.len();
        let mut songs = Vec::with_capacity(total);

        for (index, record) in records.into_iter().enumerate() {
            let duration_seconds = match self.probe.probe(&record.url).await {
                Ok(seconds) => Some(seconds),
                Err(source) => match self.on_failure {
                    ProbeFailurePolicy::Abort => {
                        return Err(CatalogError::Probe {
                            name: record.name,
                            source,
                        });
                    }
                    ProbeFailurePolicy::Unknown => {
                        warn!("Duration of \"{}\" unknown: {source}", record.name);
                        None
                    }
                },
            };

            songs.push(Song {
                index,
                cover_url: resolve_cover(self.asset_base, &record.cover),
                name: record.name,
                artist: record.artist,
                url: record.url,
                accent: record.accent,
                duration_seconds,
                top_track: record.top_track,
            });

            on_progress(BuildProgress {
                probed: index + 1,
                total,
            });
        }

        info!("Catalog built with {} songs", songs.len());
        Ok(songs)
    }
}
