//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::settings::{Settings, Theme};
use crate::error::ExpenseError;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits
pub fn run_tui(settings: &Settings, theme: Theme) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, settings, theme);
    restore_terminal()?;

    tracing::info!("TUI session ended");
    result
}

fn event_loop(terminal: &mut Tui, settings: &Settings, theme: Theme) -> Result<()> {
    let mut app = App::new(settings).with_theme(theme);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms.max(10)));

    tracing::info!(theme = %theme, "TUI session started");

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;

        let event = events
            .next()
            .map_err(|_| ExpenseError::Tui("terminal event stream closed".into()))?;

        match event {
            Event::Resize(_, _) => {
                // Redrawn on the next pass
            }
            event => handle_event(&mut app, event)?,
        }
    }

    Ok(())
}
