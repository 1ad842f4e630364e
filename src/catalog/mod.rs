//! The in-memory playable catalog: enriched songs, how they are built from
//! CMS records and how they are filtered for display.

pub mod builder;
pub mod filter;

pub use builder::{BuildProgress, CatalogBuilder, CatalogError};
pub use filter::{Tab, filter_songs, visible_indices};

use crate::util::time::format_duration;

/// A playable catalog entry. Built once per catalog load, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Position in the catalog, assigned at build time.
    pub index: usize,
    pub name: String,
    pub artist: String,
    pub url: String,
    pub cover_url: String,
    /// `#RRGGBB` accent color.
    pub accent: String,
    /// `None` when the probe failed and the entry was kept anyway.
    pub duration_seconds: Option<f64>,
    pub top_track: bool,
}

impl Song {
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_seconds)
    }
}

/// Full cover URL, or an empty string for records without a cover.
pub fn resolve_cover(asset_base: &str, cover: &str) -> String {
    if cover.trim().is_empty() {
        return String::new();
    }
    format!(
        "{}/{}",
        asset_base.trim_end_matches('/'),
        cover.trim_start_matches('/')
    )
}
