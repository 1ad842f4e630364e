pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

const FRAME_STEP_MS: u64 = 100;
const PULSE: [&str; 6] = ["·", "•", "●", "●", "•", "·"];

/// Marker for the current row; pulses while playing.
pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if !is_playing {
        return "•";
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    PULSE[(now / FRAME_STEP_MS) as usize % PULSE.len()]
}
