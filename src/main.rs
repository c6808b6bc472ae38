use commodity_scanner::config::{Config, FeedMode};
use commodity_scanner::services::{run_feed, QuoteBoard, QuoteFeed, ReferenceCatalog, ReplayFeed, SimulatedFeed};
use commodity_scanner::tui::{run_tui, LogBuffer, LogMakeWriter};
use commodity_scanner::AppState;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Arc::new(Config::from_env()?);

    // Logs go to an in-memory buffer; stderr would corrupt the alternate screen.
    let log_buffer = Arc::new(LogBuffer::new(config.log_capacity));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "commodity_scanner=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(LogMakeWriter::new(log_buffer.clone())),
        )
        .init();

    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = ReferenceCatalog::from_file(path)?;
            info!("Loaded catalog from {} ({} instruments)", path.display(), catalog.len());
            catalog
        }
        None => ReferenceCatalog::commodities(),
    };
    let catalog = Arc::new(catalog);

    let feed: Box<dyn QuoteFeed> = match &config.feed {
        FeedMode::Simulated => Box::new(SimulatedFeed::new(&catalog, config.seed)),
        FeedMode::Replay(path) => Box::new(ReplayFeed::open(path).await?),
    };
    let feed_name = feed.name().to_string();

    let board = QuoteBoard::new();
    let feed_task = tokio::spawn(run_feed(feed, board.clone(), config.refresh_interval()));

    let app_state = Arc::new(AppState::new(
        config.clone(),
        catalog,
        board,
        log_buffer,
        feed_name,
    ));

    info!("Starting scanner with {} feed", app_state.feed_name);
    let result = run_tui(app_state).await;

    feed_task.abort();
    if let Err(ref e) = result {
        warn!("Terminal error: {}", e);
    }

    result.map_err(Into::into)
}
