use std::sync::mpsc;
use std::time::Instant;

use log::debug;

use crate::event::at::At;
use crate::event::batch::BatchDescriptor;
use crate::event::loss::Loss;
use crate::listener::listener::TrainingListener;
use crate::report::epoch_stats::EpochStats;

/// Streams one `EpochStats` per completed epoch through an mpsc channel.
///
/// The listener is purely observational: if the receiving end has been
/// dropped, the stats value is discarded and training is unaffected.
pub struct StatsListener {
    tx: mpsc::Sender<EpochStats>,
    epoch_started: Option<Instant>,
    batch_count: u64,
    example_count: u64,
    loss_sum: f64,
    etl_ms: u64,
}

impl StatsListener {
    pub fn new(tx: mpsc::Sender<EpochStats>) -> StatsListener {
        StatsListener {
            tx,
            epoch_started: None,
            batch_count: 0,
            example_count: 0,
            loss_sum: 0.0,
            etl_ms: 0,
        }
    }
}

impl TrainingListener for StatsListener {
    fn on_epoch_start(&mut self, _at: &At) {
        self.epoch_started = Some(Instant::now());
        self.batch_count = 0;
        self.example_count = 0;
        self.loss_sum = 0.0;
        self.etl_ms = 0;
    }

    fn on_iteration_start(&mut self, _at: &At, _batch: &BatchDescriptor, etl_ms: u64) {
        self.etl_ms += etl_ms;
    }

    fn on_iteration_done(&mut self, _at: &At, batch: &BatchDescriptor, loss: &Loss) {
        self.batch_count += 1;
        if let Some(n) = batch.example_count() {
            self.example_count += n as u64;
        }
        self.loss_sum += loss.total();
    }

    fn on_epoch_end(&mut self, at: &At) {
        let elapsed_ms = self
            .epoch_started
            .map(|t| t.elapsed().as_millis() as u64)
            .unwrap_or(0);
        let mean_loss = if self.batch_count > 0 {
            Some(self.loss_sum / self.batch_count as f64)
        } else {
            None
        };

        let stats = EpochStats {
            epoch: at.epoch,
            end_iteration: at.iteration,
            batch_count: self.batch_count,
            example_count: self.example_count,
            mean_loss,
            elapsed_ms,
            etl_ms: self.etl_ms,
        };

        if self.tx.send(stats).is_err() {
            debug!("epoch stats receiver dropped, discarding stats for epoch {}", at.epoch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_epoch(listener: &mut StatsListener, epoch: usize, iterations: usize) {
        let start = epoch * iterations;
        listener.on_epoch_start(&At::new(epoch, start));
        let batch = BatchDescriptor::new(1, Some(16));
        for i in 1..=iterations {
            let at = At::new(epoch, start + i);
            listener.on_iteration_start(&at, &batch, 2);
            listener.on_iteration_done(&at, &batch, &Loss::single(0.5));
        }
        listener.on_epoch_end(&At::new(epoch, start + iterations));
    }

    #[test]
    fn emits_one_stats_record_per_epoch() {
        let (tx, rx) = mpsc::channel();
        let mut listener = StatsListener::new(tx);

        run_epoch(&mut listener, 0, 4);
        run_epoch(&mut listener, 1, 4);
        drop(listener);

        let all: Vec<_> = rx.iter().collect();
        assert_eq!(all.len(), 2);

        let first = &all[0];
        assert_eq!(first.epoch, 0);
        assert_eq!(first.end_iteration, 4);
        assert_eq!(first.batch_count, 4);
        assert_eq!(first.example_count, 64);
        assert_eq!(first.etl_ms, 8);
        assert_eq!(first.mean_loss, Some(0.5));

        // Totals reset between epochs.
        assert_eq!(all[1].batch_count, 4);
        assert_eq!(all[1].epoch, 1);
    }

    #[test]
    fn empty_epoch_has_no_mean_loss() {
        let (tx, rx) = mpsc::channel();
        let mut listener = StatsListener::new(tx);
        listener.on_epoch_start(&At::new(0, 0));
        listener.on_epoch_end(&At::new(0, 0));

        let stats = rx.recv().unwrap();
        assert_eq!(stats.batch_count, 0);
        assert_eq!(stats.mean_loss, None);
    }

    #[test]
    fn dropped_receiver_is_not_an_error() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut listener = StatsListener::new(tx);
        run_epoch(&mut listener, 0, 2);
    }
}
