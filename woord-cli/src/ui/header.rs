use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use unicode_width::UnicodeWidthStr;

use crate::app::{AppMode, AppState};

use super::progress::progress_indicator;
use super::theme::Theme;

/// Header widget showing title, language header, and status
pub struct Header<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

fn display_len(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Columns left for the frame title between the logo and the status
fn title_width(area_width: u16, status: &str) -> usize {
    area_width.saturating_sub(display_len(status).saturating_add(TITLE_X + 3)) as usize
}

const TITLE_X: u16 = 9;

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        // Title
        let title_style = Style::default()
            .fg(self.theme.purple)
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x + 1, area.y, "WOORD", title_style);

        buf.set_string(
            area.x + 7,
            area.y,
            "─",
            Style::default().fg(self.theme.border),
        );

        let mode = self.state.mode();
        let frame_title = if mode == AppMode::Loading {
            self.state.status.clone()
        } else {
            self.state.frame().title
        };
        let title_style = if mode == AppMode::Viewing {
            Style::default()
                .fg(self.theme.yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.fg)
        };

        // Status (right-aligned)
        let status = match mode {
            AppMode::Loading => {
                progress_indicator(&self.state.progress, self.state.spinner_frame)
            }
            AppMode::Selecting => format!(
                "{} lists · {}",
                self.state.browser.lists().len(),
                self.state.source_label
            ),
            AppMode::Viewing => {
                let words = self
                    .state
                    .browser
                    .selected()
                    .map(|l| l.pair_count())
                    .unwrap_or(0);
                let swapped = if self.state.browser.is_swapped() {
                    " (swapped)"
                } else {
                    ""
                };
                format!("{words} words{swapped}")
            }
        };

        buf.set_stringn(
            area.x + TITLE_X,
            area.y,
            &frame_title,
            title_width(area.width, &status),
            title_style,
        );

        let status_x = (area.x + area.width).saturating_sub(display_len(&status) + 2);
        let status_style = if mode == AppMode::Loading {
            Style::default().fg(self.theme.yellow)
        } else {
            Style::default().fg(self.theme.fg_dim)
        };
        buf.set_string(status_x, area.y, &status, status_style);
    }
}
