use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Widget},
};
use woord_core::FetchProgress;

use super::theme::Theme;

/// Braille spinner characters
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Progress widget shown while lists are retrieved
pub struct ProgressView<'a> {
    progress: &'a FetchProgress,
    status: &'a str,
    spinner_frame: usize,
    theme: &'a Theme,
}

impl<'a> ProgressView<'a> {
    pub fn new(
        progress: &'a FetchProgress,
        status: &'a str,
        spinner_frame: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            progress,
            status,
            spinner_frame,
            theme,
        }
    }
}

impl Widget for ProgressView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < 20 {
            return;
        }

        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        let spinner_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);
        buf.set_string(inner.x, inner.y, spinner.to_string(), spinner_style);

        buf.set_string(
            inner.x + 2,
            inner.y,
            self.status,
            Style::default().fg(self.theme.fg),
        );

        if let Some(id) = &self.progress.current {
            buf.set_stringn(
                inner.x,
                inner.y + 1,
                format!("list {id}"),
                inner.width as usize,
                Style::default().fg(self.theme.fg_dim),
            );
        }

        let stats = format!(
            "{}/{} lists  {} failed  {:.0}%",
            self.progress.done(),
            self.progress.total,
            self.progress.failed,
            self.progress.percentage(),
        );
        buf.set_string(
            inner.x,
            inner.y + 2,
            &stats,
            Style::default().fg(self.theme.fg_muted),
        );
    }
}

/// Compact progress indicator for header
pub fn progress_indicator(progress: &FetchProgress, spinner_frame: usize) -> String {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    format!("{} {}/{} lists", spinner, progress.done(), progress.total)
}
