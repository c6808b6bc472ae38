//! Commodity Scanner - real-time terminal scanner for commodity instruments

pub mod config;
pub mod error;
pub mod services;
pub mod tui;
pub mod types;

use config::Config;
use services::{QuoteBoard, ReferenceCatalog, SignalClassifier};
use std::sync::Arc;
use tui::LogBuffer;

/// State shared between the feed task and the renderer.
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<ReferenceCatalog>,
    pub classifier: SignalClassifier,
    pub board: Arc<QuoteBoard>,
    pub log_buffer: Arc<LogBuffer>,
    /// Name of the active feed, for the status bar.
    pub feed_name: String,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        catalog: Arc<ReferenceCatalog>,
        board: Arc<QuoteBoard>,
        log_buffer: Arc<LogBuffer>,
        feed_name: impl Into<String>,
    ) -> Self {
        Self {
            config,
            classifier: SignalClassifier::new(catalog.clone()),
            catalog,
            board,
            log_buffer,
            feed_name: feed_name.into(),
        }
    }
}

// Re-export commonly used types
pub use types::*;
