use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `StatsListener`.
///
/// When a stats channel is attached to the listener set, one
/// `EpochStats` value is sent at the end of every completed epoch.
/// Receivers (dashboards, chart recorders) use this to drive real-time
/// progress displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// Epoch number as reported by the engine.
    pub epoch: usize,
    /// Global iteration the epoch finished on.
    pub end_iteration: usize,
    /// Batches consumed in this epoch.
    pub batch_count: u64,
    /// Examples consumed in this epoch.
    pub example_count: u64,
    /// Mean total loss over the epoch's iterations, if any completed.
    pub mean_loss: Option<f64>,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
    /// Time spent blocked on data loading in this epoch, in milliseconds.
    pub etl_ms: u64,
}
