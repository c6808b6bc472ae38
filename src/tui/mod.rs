//! Terminal UI: the scanner table and a logs view.

mod app;
mod events;
mod logs;
mod scanner;
mod state;
mod theme;

pub use app::{run_tui, App};
pub use events::{action_for, Action};
pub use scanner::{format_pct, format_price, format_ratio, format_volume, price_decimals, COLUMNS};
pub use state::{LogBuffer, LogLevel, LogLine, LogMakeWriter};
pub use theme::Theme;

/// Route/View enum for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Scanner,
    Logs,
}

impl Route {
    /// Get all available routes.
    pub fn all() -> Vec<Self> {
        vec![Self::Scanner, Self::Logs]
    }

    /// Get the route name.
    pub fn name(&self) -> &str {
        match self {
            Self::Scanner => "Scanner",
            Self::Logs => "Logs",
        }
    }

    /// Get the route shortcut key.
    pub fn key(&self) -> char {
        match self {
            Self::Scanner => '1',
            Self::Logs => '2',
        }
    }
}
