use ratatui::style::Color;

/// Catppuccin Mocha-inspired dark theme with 24-bit RGB colors
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub fg_muted: Color,

    // Accent colors
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub purple: Color,

    // UI elements
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 46),          // Base
            fg: Color::Rgb(205, 214, 244),       // Text
            fg_dim: Color::Rgb(166, 173, 200),   // Subtext0
            fg_muted: Color::Rgb(127, 132, 156), // Overlay0

            blue: Color::Rgb(137, 180, 250),   // Blue
            green: Color::Rgb(166, 227, 161),  // Green
            yellow: Color::Rgb(249, 226, 175), // Yellow
            purple: Color::Rgb(203, 166, 247), // Mauve

            border: Color::Rgb(88, 91, 112),         // Surface2
            selection_bg: Color::Rgb(203, 166, 247), // Mauve
            selection_fg: Color::Rgb(30, 30, 46),    // Base
        }
    }
}
