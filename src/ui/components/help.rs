use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct HelpOverlay<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" Keyboard Shortcuts ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let section = |text: &str| {
            Line::from(Span::styled(
                format!(" {text}"),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let binding = |keys: &str, what: &str| {
            Line::from(vec![
                Span::styled(format!("   {keys:<18}"), Style::default().fg(colors.fg())),
                Span::styled(what.to_string(), Style::default().fg(colors.dim())),
            ])
        };

        let lines = vec![
            section("List navigation"),
            binding("↑ / ↓", "Move between lessons"),
            binding("Enter", "Open lesson & move to editor"),
            Line::from(""),
            section("Saving"),
            binding("Ctrl+S / Ctrl+O", "Save words"),
            binding("Ctrl+Q / Ctrl+C", "Quit (no save)"),
            Line::from(""),
            section("Focus"),
            binding("Tab", "Toggle list ⇄ editor"),
            binding("Shift+Tab", "Always return to list"),
            binding("Esc", "Editor → list"),
            Line::from(""),
            Line::from(Span::styled(
                " Press any key to close ",
                Style::default().fg(colors.dim()),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
