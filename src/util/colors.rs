use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00ffffff);
pub const SECONDARY: Color = Color::from_u32(0x00b3b3b3);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const MUTED: Color = Color::from_u32(0x009ca3af);
pub const HIGHLIGHT: Color = Color::from_u32(0x00383838);
pub const BACKGROUND: Color = Color::from_u32(0x00121212);

/// Parses a `#RRGGBB` accent into a terminal color.
pub fn parse_accent(accent: &str) -> Option<Color> {
    let hex = accent.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(Color::from_u32)
}

/// Background for panes tinted by the current song, if any.
pub fn accent_or_background(accent: Option<&str>) -> Color {
    accent.and_then(parse_accent).unwrap_or(BACKGROUND)
}
