mod app;
mod config;
mod event;
mod input;
mod store;
mod ui;
mod words;

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::{App, Focus};
use event::{AppEvent, EventHandler};
use ui::components::confirm_dialog::ConfirmDialog;
use ui::components::editor_panel::EditorPanel;
use ui::components::entry_list::EntryList;
use ui::components::help::HelpOverlay;
use ui::components::status_bar::StatusBar;
use ui::layout::AppLayout;
use words::Status;

#[derive(Parser)]
#[command(
    name = "phonedit",
    version,
    about = "Terminal editor for phonics lesson word lists"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new();

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Tick => {}
            AppEvent::Resize(_, _) => {}
        }

        // Deferred focus transfer: the saving handler has returned and
        // selection state has settled, so the editor may claim focus now.
        app.apply_pending_focus();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);

    let complete = app
        .entries
        .iter()
        .filter(|e| Status::classify(&e.words) == Status::Complete)
        .count();
    let header_info = format!(" {complete}/{} lessons complete", app.entries.len());
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " phonedit ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            header_info,
            Style::default().fg(colors.dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let list = EntryList {
        entries: &app.entries,
        selected: app.selected,
        focused: app.focus == Focus::List,
        theme: app.theme,
    };
    frame.render_widget(list, layout.list);

    let editor = EditorPanel {
        entry: app.selected_entry(),
        input: &app.editor,
        focused: app.focus == Focus::Editor,
        theme: app.theme,
    };
    frame.render_widget(editor, layout.editor);

    let status = StatusBar {
        notice: app.notice.as_ref(),
        theme: app.theme,
    };
    frame.render_widget(status, layout.status);

    let hints = match app.focus {
        Focus::List => " [↑/↓] Select  [Enter] Edit  [Tab] Focus  [Ctrl+S] Save  [Ctrl+Q] Quit  [F1] Help",
        Focus::Editor => " [Esc] Back to list  [Tab] Focus  [Ctrl+S] Save  [Ctrl+Q] Quit  [F1] Help",
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(colors.dim()),
    )));
    frame.render_widget(footer, layout.footer);

    if app.confirm.is_some() {
        let existing = app
            .selected_entry()
            .map(|e| e.words.len())
            .unwrap_or_default();
        let dialog = ConfirmDialog {
            existing_count: existing,
            theme: app.theme,
        };
        frame.render_widget(dialog, ui::layout::centered_rect(40, 25, area));
    }

    if app.show_help {
        let help = HelpOverlay { theme: app.theme };
        frame.render_widget(help, ui::layout::centered_rect(50, 70, area));
    }
}
