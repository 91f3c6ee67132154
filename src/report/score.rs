use std::time::Instant;

use log::{debug, info};

use crate::error::ConfigError;
use crate::event::at::At;
use crate::event::batch::BatchDescriptor;
use crate::event::loss::Loss;
use crate::format::format::{format_2dp, format_5dp, format_duration_ms};
use crate::listener::listener::TrainingListener;

/// Running totals for the epoch currently in flight.
///
/// Reset once per epoch start; only meaningful while epoch reporting is
/// enabled, though accumulation is always safe to perform.
#[derive(Debug, Default)]
struct EpochAccumulator {
    started: Option<Instant>,
    example_count: u64,
    batch_count: u64,
    etl_time_ms: u64,
}

impl EpochAccumulator {
    fn restart(&mut self) {
        self.started = Some(Instant::now());
        self.example_count = 0;
        self.batch_count = 0;
        self.etl_time_ms = 0;
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.map(|t| t.elapsed().as_millis() as u64).unwrap_or(0)
    }
}

/// Sums since the last periodic report.
///
/// Reset only when a periodic report fires, never on epoch boundaries.
#[derive(Debug, Default)]
struct WindowAccumulator {
    last_iteration_started: Option<Instant>,
    etl_time_ms: u64,
    iteration_time_ms: u64,
}

/// Logs the training loss every N iterations, and a throughput summary
/// at the end of every epoch.
///
/// Periodic line:
/// `Loss at epoch 2, iteration 40: 0.03215(12 ms ETL in 10 iter)`
///
/// Epoch line:
/// `Epoch 2 complete on iteration 60 - 20 batches (640 examples) in 1.20 sec - 16.67 batches/sec, 533.33 examples/sec, 37 ms ETL time(3.08 %)`
///
/// The ETL clauses appear only when ETL time was actually observed. ETL
/// time consistently above zero indicates training is blocked waiting
/// for data.
pub struct ScoreReporter {
    frequency: usize,
    report_epochs: bool,
    epoch: EpochAccumulator,
    window: WindowAccumulator,
}

impl ScoreReporter {
    /// Reports every `frequency` iterations and at the end of each epoch.
    ///
    /// Fails with `ConfigError::InvalidFrequency` when `frequency` is
    /// zero; the value is never silently clamped.
    pub fn new(frequency: usize) -> Result<ScoreReporter, ConfigError> {
        ScoreReporter::with_report_epochs(frequency, true)
    }

    /// Reports every `frequency` iterations, and at the end of each
    /// epoch only when `report_epochs` is set.
    pub fn with_report_epochs(
        frequency: usize,
        report_epochs: bool,
    ) -> Result<ScoreReporter, ConfigError> {
        if frequency == 0 {
            return Err(ConfigError::InvalidFrequency { frequency });
        }
        Ok(ScoreReporter {
            frequency,
            report_epochs,
            epoch: EpochAccumulator::default(),
            window: WindowAccumulator::default(),
        })
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn report_epochs(&self) -> bool {
        self.report_epochs
    }
}

impl Default for ScoreReporter {
    /// Every 10 iterations, with epoch summaries.
    fn default() -> ScoreReporter {
        ScoreReporter {
            frequency: 10,
            report_epochs: true,
            epoch: EpochAccumulator::default(),
            window: WindowAccumulator::default(),
        }
    }
}

impl TrainingListener for ScoreReporter {
    fn on_epoch_start(&mut self, _at: &At) {
        if self.report_epochs {
            self.epoch.restart();
        }
    }

    fn on_epoch_end(&mut self, at: &At) {
        if self.report_epochs {
            info!(
                "{}",
                epoch_summary_line(
                    at,
                    self.epoch.batch_count,
                    self.epoch.example_count,
                    self.epoch.elapsed_ms(),
                    self.epoch.etl_time_ms,
                )
            );
        }
    }

    fn on_iteration_start(&mut self, _at: &At, _batch: &BatchDescriptor, etl_ms: u64) {
        self.window.last_iteration_started = Some(Instant::now());
        self.window.etl_time_ms += etl_ms;
        self.epoch.etl_time_ms += etl_ms;
    }

    fn on_iteration_done(&mut self, at: &At, batch: &BatchDescriptor, loss: &Loss) {
        // An iteration-done with no matching iteration-start contributes
        // zero time rather than a bogus span.
        if let Some(started) = self.window.last_iteration_started {
            self.window.iteration_time_ms += started.elapsed().as_millis() as u64;
        }
        self.epoch.batch_count += 1;
        if let Some(n) = batch.example_count() {
            self.epoch.example_count += n as u64;
        }

        if at.iteration > 0 && at.iteration % self.frequency == 0 {
            info!(
                "{}",
                periodic_report_line(at, loss.total(), self.window.etl_time_ms, self.frequency)
            );
            debug!(
                "{} training time in last {} iter",
                format_duration_ms(self.window.iteration_time_ms),
                self.frequency
            );
            self.window.iteration_time_ms = 0;
            self.window.etl_time_ms = 0;
        }
    }
}

/// Renders the periodic loss line. The ETL clause is omitted when no ETL
/// time accrued since the last report.
fn periodic_report_line(at: &At, total_loss: f64, etl_window_ms: u64, frequency: usize) -> String {
    let mut etl = String::new();
    if etl_window_ms > 0 {
        etl = format!("({} ETL", format_duration_ms(etl_window_ms));
        if frequency == 1 {
            etl.push(')');
        } else {
            etl.push_str(&format!(" in {frequency} iter)"));
        }
    }
    format!(
        "Loss at epoch {}, iteration {}: {}{}",
        at.epoch,
        at.iteration,
        format_5dp(total_loss),
        etl
    )
}

/// Renders the end-of-epoch throughput summary. A zero-duration epoch
/// reports rates of zero instead of dividing by zero.
fn epoch_summary_line(
    at: &At,
    batch_count: u64,
    example_count: u64,
    duration_ms: u64,
    etl_total_ms: u64,
) -> String {
    let (batches_per_sec, examples_per_sec) = if duration_ms > 0 {
        let seconds = duration_ms as f64 / 1_000.0;
        (batch_count as f64 / seconds, example_count as f64 / seconds)
    } else {
        (0.0, 0.0)
    };

    let mut line = format!(
        "Epoch {} complete on iteration {} - {} batches ({} examples) in {} - {} batches/sec, {} examples/sec",
        at.epoch,
        at.iteration,
        batch_count,
        example_count,
        format_duration_ms(duration_ms),
        format_2dp(batches_per_sec),
        format_2dp(examples_per_sec),
    );

    if etl_total_ms > 0 {
        let etl_percent = if duration_ms > 0 {
            100.0 * etl_total_ms as f64 / duration_ms as f64
        } else {
            0.0
        };
        line.push_str(&format!(
            ", {} ETL time({} %)",
            format_duration_ms(etl_total_ms),
            format_2dp(etl_percent)
        ));
    }

    line
}
