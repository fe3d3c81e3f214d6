use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::store::schema::Entry;
use crate::ui::theme::Theme;

/// Ordered list of lesson labels with a single highlighted selection.
/// Labels carry the derived status icon, so re-rendering after a save
/// refreshes them with no extra bookkeeping.
pub struct EntryList<'a> {
    pub entries: &'a [Entry],
    pub selected: Option<usize>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl EntryList<'_> {
    /// First visible row, chosen so the selection stays on screen.
    fn scroll_offset(&self, visible: usize) -> usize {
        let selected = match self.selected {
            Some(idx) => idx,
            None => return 0,
        };
        if visible == 0 || selected < visible {
            return 0;
        }
        (selected + 1 - visible).min(self.entries.len().saturating_sub(visible))
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(" Lessons ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                " No lessons loaded ",
                Style::default().fg(colors.dim()),
            )));
            empty.render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        let offset = self.scroll_offset(visible);

        let mut lines: Vec<Line> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate().skip(offset).take(visible) {
            let is_selected = self.selected == Some(i);
            let indicator = if is_selected { "\u{25b6} " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            lines.push(Line::from(vec![
                Span::styled(indicator, style),
                Span::styled(entry.label(), style),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
