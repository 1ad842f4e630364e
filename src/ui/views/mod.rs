pub mod music_display;
pub mod music_list;

pub use music_display::MusicDisplay;
pub use music_list::MusicList;
