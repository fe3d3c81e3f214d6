use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::theme::Theme;

/// Modal asking whether to replace an entry's existing words. Shown
/// only when the entry already has words and the parsed input differs.
pub struct ConfirmDialog<'a> {
    pub existing_count: usize,
    pub theme: &'a Theme,
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" Confirm Replace ")
            .border_style(Style::default().fg(colors.warning()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let n = self.existing_count;
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Replace existing {n} words?"),
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(colors.success())),
                Span::styled(" replace   ", Style::default().fg(colors.dim())),
                Span::styled("[n]", Style::default().fg(colors.error())),
                Span::styled(" keep current", Style::default().fg(colors.dim())),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
