//! Route switching, render loop and terminal setup.

use super::events::{self, Action};
use super::logs::{self, LogsView};
use super::state::LogLine;
use super::{scanner, Route, Theme};
use crate::AppState;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame, Terminal,
};
use std::{io, sync::Arc};
use tracing::info;

/// Scanner screen state.
pub struct App {
    current_route: Route,
    app_state: Arc<AppState>,
    theme: Theme,
    logs_view: LogsView,
    /// Log lines captured when the logs view was paused.
    frozen_logs: Option<Vec<LogLine>>,
    should_quit: bool,
}

impl App {
    pub fn new(app_state: Arc<AppState>) -> Self {
        Self {
            current_route: Route::Scanner,
            app_state,
            theme: Theme::default(),
            logs_view: LogsView::default(),
            frozen_logs: None,
            should_quit: false,
        }
    }

    pub fn handle_event(&mut self, event: events::Event) {
        let key = match event {
            events::Event::Key(key) => key,
            // Ticks and resizes only trigger a redraw.
            events::Event::Tick | events::Event::Resize(_, _) => return,
        };

        match events::action_for(&key) {
            Action::Quit => self.should_quit = true,
            Action::Navigate(route) => self.current_route = route,
            Action::View(code) => {
                if self.current_route == Route::Logs {
                    let buffer = self.app_state.log_buffer.clone();
                    self.logs_view.handle_key(code, &buffer);
                    self.frozen_logs = if self.logs_view.paused {
                        Some(buffer.recent(200, self.logs_view.max_level))
                    } else {
                        None
                    };
                }
            }
        }
    }

    pub fn current_route(&self) -> Route {
        self.current_route
    }

    /// True once a quit key was pressed.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw tabs, the active route and the status bar.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        self.render_tabs(frame, chunks[0]);

        match self.current_route {
            Route::Scanner => scanner::render(frame, chunks[1], &self.app_state, &self.theme),
            Route::Logs => logs::render(
                frame,
                chunks[1],
                &self.logs_view,
                &self.app_state.log_buffer,
                self.frozen_logs.as_deref(),
                &self.theme,
            ),
        }

        self.render_status_bar(frame, chunks[2]);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let routes = Route::all();
        let titles: Vec<Line> = routes
            .iter()
            .map(|r| {
                Line::from(vec![
                    Span::styled(format!("[{}] ", r.key()), self.theme.muted()),
                    Span::raw(r.name()),
                ])
            })
            .collect();

        let selected = routes
            .iter()
            .position(|r| *r == self.current_route)
            .unwrap_or(0);

        let clock = chrono::Utc::now().format(" %Y-%m-%d %H:%M:%S UTC ").to_string();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Commodity Scanner ", self.theme.title()))
                    .title(
                        ratatui::widgets::block::Title::from(clock)
                            .alignment(ratatui::layout::Alignment::Right),
                    ),
            )
            .select(selected)
            .style(self.theme.tab_inactive())
            .highlight_style(self.theme.tab_active());

        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let board = &self.app_state.board;
        let last_update = board
            .last_timestamp()
            .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string());

        let text = Line::from(vec![
            Span::styled("Feed: ", self.theme.muted()),
            Span::styled(self.app_state.feed_name.clone(), self.theme.title()),
            Span::raw(" | "),
            Span::styled("Quoted: ", self.theme.muted()),
            Span::raw(format!("{}/{}", board.len(), self.app_state.catalog.len())),
            Span::raw(" | "),
            Span::styled("Updates: ", self.theme.muted()),
            Span::raw(board.total_updates().to_string()),
            Span::raw(" | "),
            Span::styled("Last: ", self.theme.muted()),
            Span::raw(last_update),
            Span::raw(" | "),
            Span::styled("q", self.theme.muted()),
            Span::raw(" quit  "),
            Span::styled("1-2", self.theme.muted()),
            Span::raw(" switch views"),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border());

        frame.render_widget(block, area);

        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: 1,
        };

        frame.render_widget(text, inner);
    }
}

/// Run the TUI until the user quits.
pub async fn run_tui(app_state: Arc<AppState>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = app_state.config.tick_rate();
    let mut app = App::new(app_state);
    let mut event_handler = events::EventHandler::new(tick_rate);

    let result = loop {
        if let Err(e) = terminal.draw(|f| app.render(f)) {
            break Err(e);
        }

        match event_handler.next().await {
            Some(event) => app.handle_event(event),
            None => break Ok(()),
        }

        if app.should_quit() {
            info!("Quit requested");
            break Ok(());
        }
    };

    // Restore the terminal even when drawing failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
