use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://cms.samespace.com/items/songs";
pub const DEFAULT_ASSET_BASE: &str = "https://cms.samespace.com/assets/";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub probe: ProbeConfig,
    pub audio: AudioConfig,
    pub playback: PlaybackConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Catalog endpoint returning `{ "data": [...] }`.
    pub endpoint: String,
    /// Prefix joined with each record's cover id.
    pub asset_base: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Upper bound for a single duration probe.
    pub timeout_secs: u64,
    pub on_failure: ProbeFailurePolicy,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 20,
            on_failure: ProbeFailurePolicy::default(),
        }
    }
}

/// What the catalog builder does with an entry whose probe failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeFailurePolicy {
    /// Fail the whole build; the catalog stays empty.
    Abort,
    /// Keep the entry with an unknown duration.
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Initial volume, `0.0..=1.0`.
    pub volume: f32,
    pub volume_step: f32,
    pub seek_step_secs: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            volume_step: 0.05,
            seek_step_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Start playing as soon as a song gets selected.
    pub autoplay: bool,
    /// Pause output while the terminal is unfocused.
    pub pause_on_focus_loss: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            pause_on_focus_loss: true,
        }
    }
}
