use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Widget},
};

use super::theme::Theme;

/// Scrollable view of the formatted word table
pub struct WordView<'a> {
    name: &'a str,
    body: &'a str,
    scroll_offset: usize,
    theme: &'a Theme,
}

impl<'a> WordView<'a> {
    pub fn new(name: &'a str, body: &'a str, scroll_offset: usize, theme: &'a Theme) -> Self {
        Self {
            name,
            body,
            scroll_offset,
            theme,
        }
    }
}

impl Widget for WordView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 4 {
            return;
        }

        let style = Style::default().fg(self.theme.green);
        for (row, line) in self
            .body
            .lines()
            .skip(self.scroll_offset)
            .take(inner.height as usize)
            .enumerate()
        {
            buf.set_stringn(inner.x, inner.y + row as u16, line, inner.width as usize, style);
        }
    }
}
