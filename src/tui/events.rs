//! Event handling for the TUI.

use super::Route;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Redraw tick; the scanner re-reads the board on each one.
    Tick,
    /// Terminal resized.
    Resize(u16, u16),
}

/// What a key press means at the application level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Navigate(Route),
    /// Passed to the current view.
    View(KeyCode),
}

/// Map a key press to an application action.
pub fn action_for(key: &KeyEvent) -> Action {
    if is_quit(key) {
        return Action::Quit;
    }
    if key.modifiers == KeyModifiers::NONE {
        if let KeyCode::Char(c) = key.code {
            if let Some(route) = Route::all().into_iter().find(|r| r.key() == c) {
                return Action::Navigate(route);
            }
        }
    }
    Action::View(key.code)
}

/// Check if a key event is Ctrl+C or `q`.
pub fn is_quit(event: &KeyEvent) -> bool {
    event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL
        || event.code == KeyCode::Char('q')
}

/// Terminal event pump running on a blocking thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Start polling terminal input; emits `Tick` when no input arrives
    /// within `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::task::spawn_blocking(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                    Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                    _ => continue,
                }
            } else {
                Event::Tick
            };

            if tx.send(event).is_err() {
                break;
            }
        });

        Self { rx }
    }

    /// Receive the next event.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
