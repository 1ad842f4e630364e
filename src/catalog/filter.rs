use super::Song;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    ForYou,
    TopTracks,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::ForYou, Tab::TopTracks];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::ForYou => "For You",
            Tab::TopTracks => "Top Tracks",
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Tab::ForYou => 0,
            Tab::TopTracks => 1,
        }
    }

    pub fn from_position(position: usize) -> Self {
        Self::ALL[position % Self::ALL.len()]
    }

    pub fn next(&self) -> Self {
        Self::from_position(self.position() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_position(self.position() + Self::ALL.len() - 1)
    }

    pub fn includes(&self, song: &Song) -> bool {
        match self {
            Tab::ForYou => true,
            Tab::TopTracks => song.top_track,
        }
    }
}

fn matches(song: &Song, term: &str) -> bool {
    song.name.to_lowercase().contains(term) || song.artist.to_lowercase().contains(term)
}

/// Songs whose name or artist contains `term`, ignoring case. Order is kept.
pub fn filter_songs<'a>(songs: &'a [Song], term: &str) -> Vec<&'a Song> {
    let term = term.to_lowercase();
    songs.iter().filter(|song| matches(song, &term)).collect()
}

/// Catalog indices shown for `tab` and `term`, in catalog order.
pub fn visible_indices(songs: &[Song], tab: Tab, term: &str) -> Vec<usize> {
    filter_songs(songs, term)
        .into_iter()
        .filter(|song| tab.includes(song))
        .map(|song| song.index)
        .collect()
}
