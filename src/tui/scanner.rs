//! Scanner view - one colour-coded table per instrument group.

use crate::types::{Direction as Side, InstrumentGroup, QuoteSnapshot, SignalReport, Tone};
use crate::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::Theme;

/// Column titles and widths.
pub const COLUMNS: [(&str, u16); 13] = [
    ("Instrument", 12),
    ("Bid", 10),
    ("Ask", 10),
    ("Spread", 7),
    ("24h %", 7),
    ("Signal", 8),
    ("Direction", 9),
    ("Target", 10),
    ("Stop", 10),
    ("R/R", 5),
    ("ATR%", 6),
    ("Volume", 8),
    ("Conf%", 6),
];

/// Placeholder for sentinel or missing values.
const EMPTY_CELL: &str = "-";

/// Render the scanner view.
pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, theme: &Theme) {
    let groups = app_state.catalog.groups();
    if groups.is_empty() {
        let text = Paragraph::new(Line::from(Span::styled(
            "Catalog is empty.",
            theme.muted(),
        )))
        .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
        frame.render_widget(text, area);
        return;
    }

    // Borders (2) + header row (1) + one line per member
    let mut constraints: Vec<Constraint> = groups
        .iter()
        .map(|g| Constraint::Length(app_state.catalog.group_members(*g).len() as u16 + 3))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (group, chunk) in groups.iter().zip(chunks.iter()) {
        render_group(frame, *chunk, app_state, *group, theme);
    }
}

/// Render one group table.
fn render_group(
    frame: &mut Frame,
    area: Rect,
    app_state: &AppState,
    group: InstrumentGroup,
    theme: &Theme,
) {
    let snapshots = app_state.board.rows(&app_state.catalog, group);
    let rows: Vec<Row> = snapshots
        .iter()
        .map(|snapshot| {
            let report = app_state.classifier.evaluate(snapshot);
            build_row(snapshot, &report, theme)
        })
        .collect();

    let header = Row::new(
        COLUMNS
            .iter()
            .map(|(title, _)| Cell::from(*title))
            .collect::<Vec<_>>(),
    )
    .style(theme.header());

    let widths: Vec<Constraint> = COLUMNS.iter().map(|(_, w)| Constraint::Length(*w)).collect();

    let title = format!(
        " {} ({}/{}) ",
        group.name(),
        snapshots.len(),
        app_state.catalog.group_members(group).len()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, theme.title()))
                .border_style(theme.border()),
        );

    frame.render_widget(table, area);
}

/// Build one table row from a snapshot and its report.
fn build_row<'a>(snapshot: &QuoteSnapshot, report: &SignalReport, theme: &Theme) -> Row<'a> {
    let decimals = price_decimals(snapshot.price);

    let change_cell = match snapshot.change_24h_pct {
        Some(change) => Cell::from(format!("{:+.2}", change)).style(theme.change(change)),
        None => Cell::from(EMPTY_CELL).style(theme.muted()),
    };

    let direction_style = match snapshot.direction {
        Side::Long => theme.tone(Tone::Favorable),
        Side::Short => theme.error(),
        Side::Neutral => theme.neutral(),
    };

    Row::new(vec![
        Cell::from(snapshot.instrument.to_string()).style(theme.title()),
        Cell::from(format_price(snapshot.bid, decimals)),
        Cell::from(format_price(snapshot.ask, decimals)),
        Cell::from(format_price(report.spread, decimals))
            .style(theme.tone(report.spread_classification.tone())),
        change_cell,
        Cell::from(snapshot.signal.clone().unwrap_or_else(|| EMPTY_CELL.to_string())),
        Cell::from(snapshot.direction.name()).style(direction_style),
        Cell::from(format_price(snapshot.target, decimals)),
        Cell::from(format_price(snapshot.stop, decimals)),
        metric_cell(format_ratio(report.risk_reward_ratio), theme),
        metric_cell(format_pct(report.normalized_atr_pct), theme),
        Cell::from(format_volume(snapshot.volume)),
        Cell::from(
            snapshot
                .confidence_pct
                .map(|c| format!("{:.0}", c))
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
        ),
    ])
}

/// Sentinel cells are muted, real values neutral.
fn metric_cell<'a>(text: String, theme: &Theme) -> Cell<'a> {
    let style = if text == EMPTY_CELL {
        theme.muted()
    } else {
        theme.neutral()
    };
    Cell::from(text).style(style)
}

/// Decimal places by price magnitude.
pub fn price_decimals(price: f64) -> usize {
    let magnitude = price.abs();
    if magnitude >= 100.0 {
        2
    } else if magnitude >= 1.0 {
        3
    } else {
        4
    }
}

/// Format a price level, `-` when not a number.
pub fn format_price(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        EMPTY_CELL.to_string()
    }
}

/// Risk/reward cell. `0` is the no-signal sentinel; large ratios are not capped.
pub fn format_ratio(ratio: f64) -> String {
    if ratio > 0.0 {
        format!("{:.1}", ratio)
    } else {
        EMPTY_CELL.to_string()
    }
}

/// ATR% cell. `0` is the no-signal sentinel.
pub fn format_pct(pct: f64) -> String {
    if pct > 0.0 {
        format!("{:.2}", pct)
    } else {
        EMPTY_CELL.to_string()
    }
}

/// Compact volume (e.g. `12.3K`).
pub fn format_volume(volume: f64) -> String {
    if !volume.is_finite() {
        return EMPTY_CELL.to_string();
    }
    if volume >= 1_000_000.0 {
        format!("{:.1}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("{:.1}K", volume / 1_000.0)
    } else {
        format!("{:.0}", volume)
    }
}
