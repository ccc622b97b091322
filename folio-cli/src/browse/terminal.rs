//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{LinkBuilder, Listable, ListView, TriggerHandle};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;
use crate::Listing;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the browser until the user quits.
///
/// Blocks the calling thread; reveals triggered from here run on the
/// async runtime and show up on the next tick.
pub fn run<T: Listable>(
    view: ListView<T>,
    trigger: TriggerHandle,
    listing: Listing,
    links: LinkBuilder,
) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(view, trigger, listing, links);

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
fn run_loop<T: Listable>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<T>,
) -> Result<()> {
    loop {
        // Pick up pages revealed since the last tick
        app.refresh();

        terminal.draw(|frame| ui::render(frame, app))?;

        // The sentinel row is observed after layout, like an intersection callback
        app.observe_sentinel();

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => match handle_key(app, key) {
                    HandleResult::Quit => break,
                    HandleResult::Continue => {}
                },
                Event::Resize(_, _) => {
                    // Terminal resized, will be handled on next draw
                }
                _ => {}
            }
        }
    }

    Ok(())
}
