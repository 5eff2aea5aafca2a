use ratatui::style::Color;
use std::str::FromStr;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub overlay: Color,    // Yellow for frame outline and call boundary
    pub label_fg: Color,   // Text drawn on top of filled bars
    pub type_name: Color,  // Cyan for sizes
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    overlay: Color::Rgb(249, 226, 175),
    label_fg: Color::Rgb(30, 30, 46),
    type_name: Color::Rgb(148, 226, 213),
};

/// Map a display color token (`"red"`, `"#89b4fa"`, `"42"`) to a terminal color.
///
/// Unknown tokens fall back to the foreground color.
pub fn token_color(token: &str) -> Color {
    Color::from_str(token.trim()).unwrap_or(DEFAULT_THEME.fg)
}
