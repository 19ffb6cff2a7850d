use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Widget},
};
use woord_core::WordList;

use super::theme::Theme;

/// Selection list of word lists
pub struct ListView<'a> {
    lists: &'a [WordList],
    title: &'a str,
    cursor: usize,
    scroll_offset: usize,
    theme: &'a Theme,
}

impl<'a> ListView<'a> {
    pub fn new(
        lists: &'a [WordList],
        title: &'a str,
        cursor: usize,
        scroll_offset: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            lists,
            title,
            cursor,
            scroll_offset,
            theme,
        }
    }
}

impl Widget for ListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 10 {
            return;
        }

        if self.lists.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                "No word lists found",
                Style::default().fg(self.theme.fg_muted),
            );
            return;
        }

        let count_width = 12u16;
        let name_width = inner.width.saturating_sub(count_width) as usize;

        for (row, (index, list)) in self
            .lists
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner.height as usize)
            .enumerate()
        {
            let y = inner.y + row as u16;
            let selected = index == self.cursor;

            let (name_style, count_style) = if selected {
                let style = Style::default()
                    .fg(self.theme.selection_fg)
                    .bg(self.theme.selection_bg)
                    .add_modifier(Modifier::BOLD);
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
                (style, style)
            } else {
                (
                    Style::default().fg(self.theme.fg),
                    Style::default().fg(self.theme.fg_muted),
                )
            };

            buf.set_stringn(inner.x, y, list.name(), name_width, name_style);

            let count = format!("{} words", list.pair_count());
            let count_x = (inner.x + inner.width).saturating_sub(count.len() as u16);
            buf.set_string(count_x, y, &count, count_style);
        }
    }
}
