//! Logs view - recent tracing output with a level filter.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::state::{LogBuffer, LogLevel};
use super::Theme;

const VISIBLE_LINES: usize = 200;

/// Logs view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogsView {
    /// Most verbose level shown.
    pub max_level: LogLevel,
    pub paused: bool,
}

impl Default for LogsView {
    fn default() -> Self {
        Self {
            max_level: LogLevel::Trace,
            paused: false,
        }
    }
}

impl LogsView {
    /// Handle a key routed to this view.
    pub fn handle_key(&mut self, code: KeyCode, buffer: &LogBuffer) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') => self.max_level = LogLevel::Trace,
            KeyCode::Char('e') | KeyCode::Char('E') => self.max_level = LogLevel::Error,
            KeyCode::Char('w') | KeyCode::Char('W') => self.max_level = LogLevel::Warn,
            KeyCode::Char('i') | KeyCode::Char('I') => self.max_level = LogLevel::Info,
            KeyCode::Char('d') | KeyCode::Char('D') => self.max_level = LogLevel::Debug,
            KeyCode::Char('c') | KeyCode::Char('C') => buffer.clear(),
            KeyCode::Char('p') | KeyCode::Char('P') => self.paused = !self.paused,
            _ => {}
        }
    }
}

/// Render the logs view. `frozen` holds the lines captured when paused.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &LogsView,
    buffer: &LogBuffer,
    frozen: Option<&[super::state::LogLine]>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Controls
            Constraint::Min(0),    // Output
        ])
        .split(area);

    render_controls(frame, chunks[0], view, theme);

    let lines = match frozen {
        Some(lines) => lines.to_vec(),
        None => buffer.recent(VISIBLE_LINES, view.max_level),
    };

    let title = if view.paused {
        "Logs (paused)"
    } else {
        "Logs (live)"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border());

    if lines.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled("No logs yet.", theme.muted())))
            .block(block)
            .centered();
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = lines
        .iter()
        .rev()
        .map(|line| {
            let style = match line.level {
                LogLevel::Error => theme.error(),
                LogLevel::Warn => theme.warning(),
                LogLevel::Info => theme.tone(crate::types::Tone::Favorable),
                LogLevel::Debug | LogLevel::Trace => theme.muted(),
            };
            ListItem::new(Line::from(Span::styled(line.text.clone(), style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), chunks[1]);
}

fn render_controls(frame: &mut Frame, area: Rect, view: &LogsView, theme: &Theme) {
    let level_name = match view.max_level {
        LogLevel::Error => "errors",
        LogLevel::Warn => "warnings+",
        LogLevel::Info => "info+",
        LogLevel::Debug => "debug+",
        LogLevel::Trace => "all",
    };

    let text = vec![
        Line::from(vec![
            Span::styled("Filter: ", theme.muted()),
            Span::raw("[A]ll [E]rror [W]arn [I]nfo [D]ebug  "),
            Span::styled(format!("showing {}", level_name), theme.title()),
        ]),
        Line::from(vec![
            Span::styled("Actions: ", theme.muted()),
            Span::raw("[C]lear [P]ause/resume"),
        ]),
    ];

    let block = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );

    frame.render_widget(block, area);
}
