#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // Transport
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    SeekForward,
    SeekBackward,

    // Navigation
    NextTab,
    PreviousTab,
    SetTab(usize),
    ToggleMenu,

    Quit,
}
