/// Selection and playback, keyed by catalog index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Paused(usize),
    Playing(usize),
}

impl PlaybackState {
    pub fn current(&self) -> Option<usize> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Paused(index) | PlaybackState::Playing(index) => Some(*index),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing(_))
    }

    /// Selection changes always land paused.
    pub fn select(&mut self, index: usize) {
        *self = PlaybackState::Paused(index);
    }

    /// Flips play/pause. Returns false when nothing is selected.
    pub fn toggle(&mut self) -> bool {
        *self = match *self {
            PlaybackState::Idle => return false,
            PlaybackState::Paused(index) => PlaybackState::Playing(index),
            PlaybackState::Playing(index) => PlaybackState::Paused(index),
        };
        true
    }

    pub fn pause(&mut self) {
        if let PlaybackState::Playing(index) = *self {
            *self = PlaybackState::Paused(index);
        }
    }
}

/// The entry after `current` in `view`, wrapping to the first.
///
/// A selection outside the view moves to the view's first entry.
pub fn next_in_view(view: &[usize], current: Option<usize>) -> Option<usize> {
    let current = current?;
    let first = *view.first()?;
    match view.iter().position(|&i| i == current) {
        Some(pos) => Some(view[(pos + 1) % view.len()]),
        None => Some(first),
    }
}

/// The entry before `current` in `view`, wrapping to the last.
///
/// A selection outside the view moves to the view's last entry.
pub fn previous_in_view(view: &[usize], current: Option<usize>) -> Option<usize> {
    let current = current?;
    let last = *view.last()?;
    match view.iter().position(|&i| i == current) {
        Some(0) | None => Some(last),
        Some(pos) => Some(view[pos - 1]),
    }
}
