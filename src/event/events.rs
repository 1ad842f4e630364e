use crate::catalog::{BuildProgress, Song};

#[derive(Debug, Clone)]
pub enum Event {
    // Catalog
    CatalogProgress(BuildProgress),
    CatalogLoaded(Vec<Song>),

    // Audio
    TrackFetched { generation: u64, bytes: Vec<u8> },
    TrackFetchFailed { generation: u64, error: String },
    TrackEnded,
}
