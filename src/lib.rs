pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod listener;
pub mod report;

// Convenience re-exports
pub use config::ReporterSpec;
pub use error::ConfigError;
pub use event::at::At;
pub use event::batch::BatchDescriptor;
pub use event::loss::Loss;
pub use listener::listener::TrainingListener;
pub use listener::set::ListenerSet;
pub use report::channel::StatsListener;
pub use report::epoch_stats::EpochStats;
pub use report::score::ScoreReporter;
