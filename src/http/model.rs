use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct SongsResponse {
    #[serde(default)]
    pub data: Vec<SongRecord>,
}

/// A catalog entry as served by the CMS, before enrichment.
///
/// Only `name`, `artist` and `url` are required. Cosmetic fields that are
/// missing or `null` fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SongRecord {
    pub name: String,
    pub artist: String,
    pub url: String,
    /// Asset id, resolved against the asset base. Empty when absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover: String,
    /// `#RRGGBB`; empty when absent, rendered with the default background.
    #[serde(default, deserialize_with = "null_as_default")]
    pub accent: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_track: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
