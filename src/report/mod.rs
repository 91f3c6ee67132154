pub mod score;
pub mod epoch_stats;
pub mod channel;

pub use score::ScoreReporter;
pub use epoch_stats::EpochStats;
pub use channel::StatsListener;
