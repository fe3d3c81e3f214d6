use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::{Notice, Severity};
use crate::ui::theme::Theme;

/// One-line report area for the most recent notice (save outcome,
/// load error, ignored input, …).
pub struct StatusBar<'a> {
    pub notice: Option<&'a Notice>,
    pub theme: &'a Theme,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let Some(notice) = self.notice else {
            return;
        };

        let color = match notice.severity() {
            Severity::Info => colors.fg(),
            Severity::Success => colors.success(),
            Severity::Warning => colors.warning(),
            Severity::Error => colors.error(),
        };

        let line = Line::from(Span::styled(
            format!(" {}", notice.message()),
            Style::default().fg(color),
        ));
        Paragraph::new(line).render(area, buf);
    }
}
