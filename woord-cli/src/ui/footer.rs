use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::AppMode;

use super::theme::Theme;

/// Footer widget showing keyboard hints and the quit hint
pub struct Footer<'a> {
    mode: AppMode,
    quit_hint: &'a str,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(mode: AppMode, quit_hint: &'a str, theme: &'a Theme) -> Self {
        Self {
            mode,
            quit_hint,
            theme,
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let hints: &[(&str, &str)] = match self.mode {
            AppMode::Loading => &[],
            AppMode::Selecting => &[("↑↓", "Navigate"), ("Enter", "Open list")],
            AppMode::Viewing => &[("s", "Swap columns"), ("b", "Back"), ("↑↓", "Scroll")],
        };

        let key_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg_dim);
        let sep_style = Style::default().fg(self.theme.border);

        let mut x = area.x + 1;
        for (key, desc) in hints {
            buf.set_string(x, area.y, *key, key_style);
            x += key.chars().count() as u16 + 1;

            buf.set_string(x, area.y, *desc, desc_style);
            x += desc.chars().count() as u16;

            buf.set_string(x, area.y, "  │  ", sep_style);
            x += 5;

            if x >= area.x + area.width - 5 {
                return;
            }
        }

        let remaining = (area.x + area.width).saturating_sub(x) as usize;
        buf.set_stringn(
            x,
            area.y,
            self.quit_hint,
            remaining,
            Style::default().fg(self.theme.fg_muted),
        );
    }
}
