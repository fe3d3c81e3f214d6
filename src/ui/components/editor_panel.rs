use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::store::schema::Entry;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;
use crate::words::{self, TARGET_WORD_COUNT};

/// Free-text editor for the selected entry's word list, shown as one
/// comma-separated line. Edits live only in the input buffer until a
/// save action commits them.
pub struct EditorPanel<'a> {
    pub entry: Option<&'a Entry>,
    pub input: &'a LineInput,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for EditorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(" Words ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(entry) = self.entry else {
            let hint = Paragraph::new(Line::from(Span::styled(
                " Select a lesson to edit ",
                Style::default().fg(colors.dim()),
            )));
            hint.render(inner, buf);
            return;
        };

        let header = format!(" Editing: {} \u{2192} {}", entry.group, entry.title);

        let (before, cursor_ch, after) = self.input.render_parts();
        let mut input_spans = vec![
            Span::styled(" ", Style::default()),
            Span::styled(before, Style::default().fg(colors.fg())),
        ];
        match cursor_ch {
            Some(ch) => {
                input_spans.push(Span::styled(
                    ch.to_string(),
                    Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg()),
                ));
                input_spans.push(Span::styled(after, Style::default().fg(colors.fg())));
            }
            None if self.focused => {
                // Block cursor at end of line
                input_spans.push(Span::styled(
                    " ",
                    Style::default().bg(colors.cursor_bg()),
                ));
            }
            None => {}
        }

        let count = words::parse_list(self.input.value()).len();
        let count_color = if count >= TARGET_WORD_COUNT {
            colors.success()
        } else {
            colors.dim()
        };

        let lines = vec![
            Line::from(Span::styled(
                header,
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(input_spans),
            Line::from(""),
            Line::from(Span::styled(
                format!(" {count}/{TARGET_WORD_COUNT} words"),
                Style::default().fg(count_color),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
