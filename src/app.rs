//! TUI application state and event handling

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::error;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use tsugi_core::{Task, TaskId, TaskStore};

use crate::error::{AppError, Result};
use crate::storage::JsonStorage;
use crate::ui;

/// Category offered by the add dialog before any task has been added.
pub const DEFAULT_CATEGORY: &str = "Work";

/// Field focus inside the add dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogField {
    Text,
    Category,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogMode {
    None,
    AddTask {
        text: String,
        category: String,
        field: DialogField,
    },
    Help,
}

pub struct App {
    pub store: TaskStore,
    storage: JsonStorage,
    pub selected_index: usize,
    pub sidebar_focused: bool,
    pub sidebar_selection: usize,
    pub dialog: DialogMode,
    pub should_quit: bool,
    pub message: Option<String>,
    last_category: String,
}

impl App {
    /// Build the app, seeding the store from persisted state.
    ///
    /// Seeding never fails: missing or corrupt store files load as an
    /// empty list, and nothing is written back until the first mutation.
    pub fn new(storage: JsonStorage) -> Self {
        let store = TaskStore::with_tasks(storage.load());
        Self {
            store,
            storage,
            selected_index: 0,
            sidebar_focused: false,
            sidebar_selection: 0,
            dialog: DialogMode::None,
            should_quit: false,
            message: None,
            last_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Write the full task list after a mutation.
    ///
    /// Called once per add/toggle/delete, never debounced. Failures are
    /// logged and surfaced as a transient message; in-memory state stays
    /// authoritative.
    fn persist(&mut self) {
        if let Err(e) = self.storage.save(self.store.tasks()) {
            error!("save failed: {e}");
            self.message = Some(format!("Failed to save: {e}"));
        }
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.filtered_tasks()
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.store
            .filtered_tasks()
            .get(self.selected_index)
            .map(|t| t.id.clone())
    }

    fn clamp_selection(&mut self) {
        let len = self.store.filtered_tasks().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.store.filtered_tasks().len();
        if len == 0 {
            return;
        }

        self.selected_index = if delta < 0 {
            self.selected_index.saturating_sub((-delta) as usize)
        } else {
            (self.selected_index + delta as usize).min(len - 1)
        };
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.toggle_task(&id);
            self.persist();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.delete_task(&id);
            self.clamp_selection();
            self.persist();
        }
    }

    /// Open the add dialog with an empty text field and the last used
    /// category pre-filled.
    pub fn open_add_dialog(&mut self) {
        self.dialog = DialogMode::AddTask {
            text: String::new(),
            category: self.last_category.clone(),
            field: DialogField::Text,
        };
    }

    /// Submit the add dialog.
    ///
    /// Whitespace-only text adds nothing and keeps the dialog open; a
    /// successful add remembers the category for the next dialog.
    pub fn submit_add(&mut self, text: &str, category: &str) {
        if self.store.add_task(text, category).is_some() {
            self.last_category = category.to_string();
            self.persist();
            self.dialog = DialogMode::None;
        } else {
            self.message = Some("Task text cannot be empty".to_string());
        }
    }

    // Sidebar navigation

    pub fn toggle_sidebar_focus(&mut self) {
        self.sidebar_focused = !self.sidebar_focused;
        if self.sidebar_focused {
            self.sidebar_selection = 0;
        }
    }

    pub fn move_sidebar_selection(&mut self, delta: i32) {
        let len = self.store.categories().len();
        if len == 0 {
            return;
        }

        self.sidebar_selection = if delta < 0 {
            self.sidebar_selection.saturating_sub((-delta) as usize)
        } else {
            (self.sidebar_selection + delta as usize).min(len - 1)
        };
    }

    /// Apply the highlighted sidebar category as the filter.
    ///
    /// Filter selection is ephemeral: no write goes to storage.
    pub fn select_sidebar_item(&mut self) {
        let categories = self.store.categories();
        if let Some(category) = categories.get(self.sidebar_selection) {
            self.store.set_selected_category(category.clone());
            self.selected_index = 0;
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // A fresh key dismisses the previous transient message, but any
        // message produced below survives until the next key.
        self.message = None;

        if self.dialog != DialogMode::None {
            handle_dialog_input(self, code);
            return;
        }

        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.sidebar_focused {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.toggle_sidebar_focus(),
                KeyCode::Up | KeyCode::Char('k') => self.move_sidebar_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_sidebar_selection(1),
                KeyCode::Char(' ') | KeyCode::Enter => self.select_sidebar_item(),
                KeyCode::Char('?') => self.dialog = DialogMode::Help,
                _ => {}
            }
        } else {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab | KeyCode::Left | KeyCode::Char('h') => self.toggle_sidebar_focus(),
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
                KeyCode::Char('g') | KeyCode::Home => self.selected_index = 0,
                KeyCode::Char('G') | KeyCode::End => {
                    let len = self.store.filtered_tasks().len();
                    if len > 0 {
                        self.selected_index = len - 1;
                    }
                }
                KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => self.toggle_selected(),
                KeyCode::Char('a') => self.open_add_dialog(),
                KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                KeyCode::Char('?') => self.dialog = DialogMode::Help,
                _ => {}
            }
        }
    }
}

fn handle_dialog_input(app: &mut App, key: KeyCode) {
    match &mut app.dialog {
        DialogMode::AddTask {
            text,
            category,
            field,
        } => match key {
            KeyCode::Esc => app.dialog = DialogMode::None,
            KeyCode::Enter => {
                let text = text.clone();
                let category = category.clone();
                app.submit_add(&text, &category);
            }
            KeyCode::Tab => {
                *field = match field {
                    DialogField::Text => DialogField::Category,
                    DialogField::Category => DialogField::Text,
                };
            }
            KeyCode::Backspace => {
                match field {
                    DialogField::Text => text.pop(),
                    DialogField::Category => category.pop(),
                };
            }
            KeyCode::Char(c) => match field {
                DialogField::Text => text.push(c),
                DialogField::Category => category.push(c),
            },
            _ => {}
        },
        DialogMode::Help => match key {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q') => {
                app.dialog = DialogMode::None;
            }
            _ => {}
        },
        DialogMode::None => {}
    }
}

/// Run the TUI until the user quits, restoring the terminal on the way
/// out even when the loop fails.
pub fn run(app: &mut App) -> Result<()> {
    enable_raw_mode().map_err(|e| AppError::io("Failed to enable raw mode", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| AppError::io("Failed to set up terminal", e))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::io("Failed to create terminal", e))?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| AppError::io("Failed to draw", e))?;

        if let Event::Key(key) =
            event::read().map_err(|e| AppError::io("Failed to read event", e))?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
