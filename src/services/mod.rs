pub mod board;
pub mod catalog;
pub mod classifier;
pub mod feed;

pub use board::QuoteBoard;
pub use catalog::{CatalogBuilder, ReferenceCatalog};
pub use classifier::{
    classify_against, normalize_volatility, risk_reward, risk_reward_value, SignalClassifier,
};
pub use feed::{run_feed, QuoteFeed, ReplayFeed, SimulatedFeed};
