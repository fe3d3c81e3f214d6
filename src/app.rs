use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::config::Config;
use crate::input::{self, Action};
use crate::store::json_store::{DataStore, StoreError};
use crate::store::schema::Entry;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;
use crate::words::{self, TARGET_WORD_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    List,
    Editor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// User-facing reports. All are recoverable; none terminates the app.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    NoSelection,
    EmptyIgnored,
    ReplaceDeclined,
    Complete,
    Incomplete(usize),
    MissingData(String),
    CorruptData(String),
    LoadFailed(String),
    WriteFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::NoSelection => "Select a lesson first.".to_string(),
            Notice::EmptyIgnored => "Empty input ignored, keeping existing words.".to_string(),
            Notice::ReplaceDeclined => "Replace cancelled, words unchanged.".to_string(),
            Notice::Complete => {
                format!("Marked complete ({TARGET_WORD_COUNT} words). Moving to next.")
            }
            Notice::Incomplete(count) => {
                format!("Saved, still incomplete ({count}/{TARGET_WORD_COUNT}).")
            }
            Notice::MissingData(detail)
            | Notice::CorruptData(detail)
            | Notice::LoadFailed(detail)
            | Notice::WriteFailed(detail) => detail.clone(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Notice::NoSelection | Notice::EmptyIgnored | Notice::ReplaceDeclined => {
                Severity::Warning
            }
            Notice::Complete => Severity::Success,
            Notice::Incomplete(_) => Severity::Info,
            Notice::MissingData(_)
            | Notice::CorruptData(_)
            | Notice::LoadFailed(_)
            | Notice::WriteFailed(_) => Severity::Error,
        }
    }
}

/// Replacement waiting on the user's yes/no in the confirm dialog.
pub struct PendingReplace {
    pub new_words: Vec<String>,
}

pub struct App {
    pub entries: Vec<Entry>,
    pub selected: Option<usize>,
    pub focus: Focus,
    /// Focus change scheduled by the save protocol's auto-advance.
    /// Applied by the run loop after the current handler has returned,
    /// never inside the handler that requested it.
    pub pending_focus: Option<Focus>,
    pub editor: LineInput,
    pub notice: Option<Notice>,
    pub confirm: Option<PendingReplace>,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: &'static Theme,
    pub config: Config,
    store: DataStore,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let store = DataStore::new(&config.working_file, &config.seed_file);
        Self::with_store(store, config, theme)
    }

    pub fn with_store(store: DataStore, config: Config, theme: &'static Theme) -> Self {
        let (entries, notice) = match store.load() {
            Ok(entries) => (entries, None),
            Err(err) => {
                // The app still comes up, over an empty document
                let notice = match &err {
                    StoreError::MissingDataFile { .. } => Notice::MissingData(err.to_string()),
                    StoreError::CorruptDataFile { .. } => Notice::CorruptData(err.to_string()),
                    _ => Notice::LoadFailed(err.to_string()),
                };
                (Vec::new(), Some(notice))
            }
        };

        Self {
            entries,
            selected: None,
            focus: Focus::List,
            pending_focus: None,
            editor: LineInput::new(""),
            notice,
            confirm: None,
            show_help: false,
            should_quit: false,
            theme,
            config,
            store,
        }
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected.and_then(|idx| self.entries.get(idx))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = input::action_for(&key, self.focus);

        // Quit is unconditional: no confirmation, no implicit save,
        // and it cuts through any open dialog.
        if action == Some(Action::Quit) {
            self.should_quit = true;
            return;
        }

        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Some(Action::Save) => self.save_words(),
            Some(Action::FocusToggle) => self.toggle_focus(),
            Some(Action::FocusToList) => self.focus = Focus::List,
            Some(Action::Help) => self.show_help = true,
            Some(Action::NavigateUp) => self.move_selection(-1),
            Some(Action::NavigateDown) => self.move_selection(1),
            Some(Action::Confirm) => {
                self.open_selected();
                self.focus = Focus::Editor;
            }
            Some(Action::Quit) => {}
            None => {
                if self.focus == Focus::Editor {
                    self.editor.handle(key);
                }
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => self.confirm_accept(),
            KeyCode::Char('n') | KeyCode::Esc => self.confirm_decline(),
            _ => {}
        }
    }

    /// Move selection by ±1, clamped to the list. With no current
    /// selection the first move lands on index 0. Any change
    /// repopulates the editor from the newly selected entry.
    pub fn move_selection(&mut self, delta: i32) {
        if self.entries.is_empty() {
            return;
        }
        let next = match self.selected {
            None => 0,
            Some(idx) if delta < 0 => idx.saturating_sub(1),
            Some(idx) => (idx + 1).min(self.entries.len() - 1),
        };
        if self.selected != Some(next) {
            self.selected = Some(next);
            self.open_selected();
        }
    }

    /// Rebuild the editor buffer from the selected entry, discarding
    /// any unsaved edit.
    pub fn open_selected(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.editor = LineInput::new(&words::join_list(&entry.words));
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::List => Focus::Editor,
            Focus::Editor => Focus::List,
        };
    }

    /// The save protocol. Parses the editor text, guards against
    /// accidental wipes and silent replacement, persists the whole
    /// document, and auto-advances when the entry reaches the target
    /// word count.
    pub fn save_words(&mut self) {
        let Some(idx) = self.selected else {
            self.notice = Some(Notice::NoSelection);
            return;
        };

        let new_words = words::parse_list(self.editor.value());
        if new_words.is_empty() {
            self.notice = Some(Notice::EmptyIgnored);
            return;
        }

        let entry = &self.entries[idx];
        if !entry.words.is_empty() && new_words != entry.words {
            self.confirm = Some(PendingReplace { new_words });
            return;
        }

        self.apply_words(idx, new_words);
    }

    pub fn confirm_accept(&mut self) {
        if let (Some(pending), Some(idx)) = (self.confirm.take(), self.selected) {
            self.apply_words(idx, pending.new_words);
        }
    }

    pub fn confirm_decline(&mut self) {
        self.confirm = None;
        self.notice = Some(Notice::ReplaceDeclined);
    }

    fn apply_words(&mut self, idx: usize, new_words: Vec<String>) {
        self.entries[idx].words = new_words;

        if let Err(err) = self.store.save(&self.entries) {
            // The edit stays in memory even though persistence failed;
            // the user sees the failure and can retry the save.
            self.notice = Some(Notice::WriteFailed(err.to_string()));
            self.focus = Focus::Editor;
            return;
        }

        let count = self.entries[idx].words.len();
        if count == TARGET_WORD_COUNT {
            self.notice = Some(Notice::Complete);
            if idx + 1 < self.entries.len() {
                self.selected = Some(idx + 1);
                self.open_selected();
                // Focus may only move once selection state has settled,
                // so it is deferred to the next event-loop turn.
                self.pending_focus = Some(Focus::Editor);
            }
        } else {
            self.notice = Some(Notice::Incomplete(count));
            self.focus = Focus::Editor;
        }
    }

    /// Drain the deferred focus transfer. Called by the run loop
    /// between events, after the scheduling handler has returned.
    pub fn apply_pending_focus(&mut self) {
        if let Some(focus) = self.pending_focus.take() {
            self.focus = focus;
        }
    }
}
