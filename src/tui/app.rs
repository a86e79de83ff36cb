use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::model::config::Config;
use crate::model::note::NoteId;
use crate::model::store::Store;
use crate::ops::view::visible_notes;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// Options collected from the command line
#[derive(Debug, Default)]
pub struct Options {
    /// Notes to pre-populate the session with
    pub seed_notes: Vec<String>,
    /// Force dark mode on, regardless of config
    pub dark: bool,
    /// Explicit config file path
    pub config_path: Option<PathBuf>,
}

/// Main application state
pub struct App {
    pub store: Store,
    pub mode: Mode,
    pub should_quit: bool,
    dark_theme: Theme,
    light_theme: Theme,
    /// Cursor index into the visible list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Byte offset of the edit cursor within the draft
    pub draft_cursor: usize,
    /// Search term to restore when Esc cancels the search
    pub search_restore: String,
    /// Help overlay visible
    pub show_help: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (dark_theme, light_theme) = Theme::from_config(&config.ui);
        let mut store = Store::new();
        store.set_dark_mode(config.ui.dark);

        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            dark_theme,
            light_theme,
            cursor: 0,
            scroll_offset: 0,
            draft_cursor: 0,
            search_restore: String::new(),
            show_help: false,
        }
    }

    /// The palette selected by the store's dark-mode flag.
    pub fn theme(&self) -> &Theme {
        if self.store.dark_mode() {
            &self.dark_theme
        } else {
            &self.light_theme
        }
    }

    /// Ids of the visible notes, in display order.
    pub fn visible_ids(&self) -> Vec<NoteId> {
        visible_notes(&self.store).iter().map(|n| n.id).collect()
    }

    /// Id of the note under the cursor, if any.
    pub fn cursor_note_id(&self) -> Option<NoteId> {
        self.visible_ids().get(self.cursor).copied()
    }

    /// Pull the cursor back into range after the visible list shrinks.
    pub fn clamp_cursor(&mut self) {
        let len = visible_notes(&self.store).len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

/// Run the TUI application
pub fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    // Config errors surface before the terminal is touched
    let config = load_config(options.config_path.as_deref())?;

    let mut app = App::new(&config);
    if options.dark {
        app.store.set_dark_mode(true);
    }
    for text in &options.seed_notes {
        app.store.add_note(text);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
