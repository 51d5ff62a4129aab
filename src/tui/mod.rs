//! Terminal front end.
//!
//! The poller owns the data; this module only draws the shared
//! [`NodeView`](crate::view::NodeView) and turns key presses into view
//! changes or node requests.

pub mod app;
pub mod render;

pub use app::{App, KeyOutcome};

use crate::actions;
use crate::error::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use peerster_api::NodeApi;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::sync::PoisonError;
use std::time::Duration;
use tracing::debug;

/// Terminal type used by the front end.
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// Enable raw mode and switch to the alternate screen.
pub fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Undo [`setup_terminal`].
pub fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draw and handle input until the user quits.
///
/// The screen is redrawn after every key press and at least every
/// `redraw_every`, so poller updates show up without input.
pub async fn run_app<A: NodeApi>(
    terminal: &mut Term,
    app: &mut App,
    api: &A,
    redraw_every: Duration,
) -> Result<()> {
    let mut redraw = tokio::time::interval(redraw_every);
    let mut events = EventStream::new();

    loop {
        {
            let view = app.view.lock().unwrap_or_else(PoisonError::into_inner);
            terminal.draw(|frame| render::ui(frame, &view, &app.input))?;
        }

        tokio::select! {
            _ = redraw.tick() => {}
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let KeyOutcome::Submit(line) = app.on_key(key) {
                            if let Err(e) = actions::submit(api, &app.view, &line).await {
                                debug!(error = %e, "action rejected");
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
