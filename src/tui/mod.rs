//! Terminal User Interface Module
//!
//! Terminal front end for uploading a CSV file and searching its records.
//! Built with Ratatui.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                CSV Search  • http://localhost:3000               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─ CSV file ─────────────────────┐   (before upload)          │
//! │  │ ./people.csv                    │                            │
//! │  └─────────────────────────────────┘                            │
//! │   Upload file  [Ctrl+U]                                         │
//! │  ┌─ Search ───────────────────────┐   (after upload)           │
//! │  ┌─ Results (2) ──────────────────────────────────────────┐    │
//! │  │ #1                                                       │    │
//! │  │   name: Ana                                              │    │
//! │  │   age: 30                                                │    │
//! │  └──────────────────────────────────────────────────────────┘    │
//! │  Ready to upload │ [Enter] Choose file [Ctrl+U] Upload ...      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::{App, AppEvent, View};
pub use event::{AppAction, EventHandler};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use tracing::{error, info};

use crate::config::ClientConfig;

/// Type alias for our terminal backend
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI application
pub async fn run(config: ClientConfig) -> anyhow::Result<()> {
    info!(api = %config.base_url(), "Starting TUI mode");

    let mut terminal = init_terminal()?;
    let mut app = App::new(config);
    let mut events = EventHandler::new(std::time::Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    if let Err(e) = restore_terminal(&mut terminal) {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    events: &mut EventHandler,
) -> anyhow::Result<()> {
    loop {
        app.poll_events();

        let height = terminal.size()?.height;
        app.calculate_scroll_bounds(height.saturating_sub(ui::CHROME_HEIGHT));

        terminal.draw(|frame| ui::render(frame, app))?;

        // Ticks arrive every 100ms, so background results are picked up promptly
        match events.next().await {
            Some(action) => app.handle_action(action),
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    info!("TUI exited normally");
    Ok(())
}
