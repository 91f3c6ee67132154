use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use rand::Rng;

use trainlog::{
    At, BatchDescriptor, ListenerSet, Loss, ScoreReporter, StatsListener, TrainingListener,
};

/// Drives the reporting listeners from a simulated training loop: three
/// epochs of 25 iterations each, with a decaying noisy loss and a little
/// synthetic data-loading latency.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (tx, rx) = mpsc::channel();

    let mut listeners = ListenerSet::new();
    listeners.push(Box::new(ScoreReporter::new(10).expect("frequency > 0")));
    listeners.push(Box::new(StatsListener::new(tx)));

    let mut rng = rand::thread_rng();
    let batch = BatchDescriptor::new(1, Some(32));
    let mut iteration = 0;

    for epoch in 0..3 {
        listeners.on_epoch_start(&At::new(epoch, iteration));

        for _ in 0..25 {
            iteration += 1;
            let at = At::new(epoch, iteration);

            let etl_ms = rng.gen_range(0..4);
            listeners.on_iteration_start(&at, &batch, etl_ms);

            // Simulated training step.
            thread::sleep(Duration::from_millis(2));
            let loss = 1.0 / (1.0 + iteration as f64 / 10.0) + rng.gen_range(-0.01..0.01);
            listeners.on_iteration_done(&at, &batch, &Loss::single(loss));
        }

        listeners.on_epoch_end(&At::new(epoch, iteration));
    }

    // Dropping the set closes the stats channel.
    drop(listeners);

    for stats in rx {
        println!(
            "epoch {}: {} batches, {} examples, mean loss {:.4}, {} ms ({} ms ETL)",
            stats.epoch,
            stats.batch_count,
            stats.example_count,
            stats.mean_loss.unwrap_or(f64::NAN),
            stats.elapsed_ms,
            stats.etl_ms,
        );
    }
}
