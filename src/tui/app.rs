//! Key handling for the terminal front end.

use crate::view::NodeView;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, Mutex, PoisonError};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Only local state changed; redraw.
    Redraw,
    /// Send this line to the node.
    Submit(String),
    /// Leave the UI.
    Quit,
}

/// Front-end state around the shared view.
pub struct App {
    /// View shared with the poller.
    pub view: Arc<Mutex<NodeView>>,
    /// Current contents of the input line.
    pub input: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(view: Arc<Mutex<NodeView>>) -> Self {
        Self {
            view,
            input: String::new(),
            should_quit: false,
        }
    }

    /// Apply one key press.
    ///
    /// Tab/Shift-Tab and F1-F3 switch panels, Up/Down move the active
    /// panel's picker, Enter submits the input line, Esc or Ctrl-C quits.
    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Tab => {
                self.with_view(|view| view.tabs.next());
                KeyOutcome::Redraw
            }
            KeyCode::BackTab => {
                self.with_view(|view| view.tabs.previous());
                KeyOutcome::Redraw
            }
            KeyCode::F(n @ 1..=3) => {
                // In range by the pattern.
                let _ = self.with_view(|view| view.tabs.activate(usize::from(n - 1)));
                KeyOutcome::Redraw
            }
            KeyCode::Up => {
                self.with_view(|view| {
                    if let Some(picker) = view.active_picker_mut() {
                        picker.select_previous();
                    }
                });
                KeyOutcome::Redraw
            }
            KeyCode::Down => {
                self.with_view(|view| {
                    if let Some(picker) = view.active_picker_mut() {
                        picker.select_next();
                    }
                });
                KeyOutcome::Redraw
            }
            KeyCode::Enter => KeyOutcome::Submit(std::mem::take(&mut self.input)),
            KeyCode::Backspace => {
                self.input.pop();
                KeyOutcome::Redraw
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                KeyOutcome::Redraw
            }
            _ => KeyOutcome::Redraw,
        }
    }

    fn quit(&mut self) -> KeyOutcome {
        self.should_quit = true;
        KeyOutcome::Quit
    }

    fn with_view<R>(&self, f: impl FnOnce(&mut NodeView) -> R) -> R {
        let mut view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut view)
    }
}
