use crate::event::at::At;
use crate::event::batch::BatchDescriptor;
use crate::event::loss::Loss;

/// Callback interface a training engine drives at lifecycle points.
///
/// Every method has a default no-op body, so implementors override only
/// the events they care about. Listeners are observational: no method
/// returns a value into the engine's control flow, and implementations
/// must not panic on degenerate inputs.
pub trait TrainingListener {
    /// Called once at the start of every epoch.
    fn on_epoch_start(&mut self, at: &At) {
        let _ = at;
    }

    /// Called once at the end of every epoch.
    fn on_epoch_end(&mut self, at: &At) {
        let _ = at;
    }

    /// Called before each training iteration.
    ///
    /// `etl_ms` is the wall-clock time, in milliseconds, that the engine
    /// spent blocked waiting for `batch` to become available.
    fn on_iteration_start(&mut self, at: &At, batch: &BatchDescriptor, etl_ms: u64) {
        let _ = (at, batch, etl_ms);
    }

    /// Called after each training iteration with the computed loss.
    fn on_iteration_done(&mut self, at: &At, batch: &BatchDescriptor, loss: &Loss) {
        let _ = (at, batch, loss);
    }
}
