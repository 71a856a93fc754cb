//! Application shell and event handling

pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::content::SiteData;
use crate::theme::{TermStyles, ThemeEngine};
use crate::ui;
use input::Action;
use state::AppState;

/// The main application
pub struct App {
    /// Loaded portfolio content
    data: SiteData,

    /// The theming runtime; sole owner of mode and applied styles
    engine: ThemeEngine,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance, seeding the theme engine from
    /// its persisted mode
    pub fn new(data: SiteData, mut engine: ThemeEngine) -> Result<Self> {
        engine.init();
        let state = AppState::new(&data);
        let terminal = Self::setup_terminal()?;

        Ok(Self { data, engine, state, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            // Resolve the active styles once per frame
            let effective = self.engine.styles();
            let styles = TermStyles::resolve(&effective);

            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.data, &effective, &styles);
            })?;

            // Handle events
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key.code) {
                        break;
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if the app should exit
    fn handle_key(&mut self, key: KeyCode) -> bool {
        let Some(action) = input::key_to_action(key) else {
            return false;
        };

        match action {
            Action::Quit => return true,

            Action::Down => self.state.content.scroll_down(1),
            Action::Up => self.state.content.scroll_up(1),
            Action::PageDown => {
                let page = self.state.content.visible_height.max(1);
                self.state.content.scroll_down(page);
            }
            Action::PageUp => {
                let page = self.state.content.visible_height.max(1);
                self.state.content.scroll_up(page);
            }
            Action::Top => self.state.content.scroll_offset = 0,
            Action::Bottom => self.state.content.scroll_offset = self.state.content.max_scroll(),

            Action::NextSection => self.state.select_next(),
            Action::PrevSection => self.state.select_prev(),

            Action::SetMode(mode) => self.engine.set_mode(mode),
            Action::CycleMode => {
                let next = self.engine.mode().next();
                self.engine.set_mode(next);
            }
        }

        false
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
