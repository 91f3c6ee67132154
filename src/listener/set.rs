use crate::event::at::At;
use crate::event::batch::BatchDescriptor;
use crate::event::loss::Loss;
use crate::listener::listener::TrainingListener;

/// An ordered collection of listeners that fans every event out to each
/// one in registration order.
///
/// `ListenerSet` implements `TrainingListener` itself, so an engine can
/// hold a single listener regardless of how many reporters are attached.
pub struct ListenerSet {
    listeners: Vec<Box<dyn TrainingListener>>,
}

impl ListenerSet {
    pub fn new() -> ListenerSet {
        ListenerSet { listeners: Vec::new() }
    }

    pub fn push(&mut self, listener: Box<dyn TrainingListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for ListenerSet {
    fn default() -> ListenerSet {
        ListenerSet::new()
    }
}

impl TrainingListener for ListenerSet {
    fn on_epoch_start(&mut self, at: &At) {
        for listener in &mut self.listeners {
            listener.on_epoch_start(at);
        }
    }

    fn on_epoch_end(&mut self, at: &At) {
        for listener in &mut self.listeners {
            listener.on_epoch_end(at);
        }
    }

    fn on_iteration_start(&mut self, at: &At, batch: &BatchDescriptor, etl_ms: u64) {
        for listener in &mut self.listeners {
            listener.on_iteration_start(at, batch, etl_ms);
        }
    }

    fn on_iteration_done(&mut self, at: &At, batch: &BatchDescriptor, loss: &Loss) {
        for listener in &mut self.listeners {
            listener.on_iteration_done(at, batch, loss);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    /// Records which events reached it, tagged with an id so ordering
    /// across listeners is observable.
    struct Recording {
        id: usize,
        tx: mpsc::Sender<(usize, &'static str, usize)>,
    }

    impl TrainingListener for Recording {
        fn on_epoch_start(&mut self, at: &At) {
            self.tx.send((self.id, "epoch_start", at.epoch)).unwrap();
        }

        fn on_epoch_end(&mut self, at: &At) {
            self.tx.send((self.id, "epoch_end", at.epoch)).unwrap();
        }

        fn on_iteration_start(&mut self, at: &At, _batch: &BatchDescriptor, _etl_ms: u64) {
            self.tx.send((self.id, "iteration_start", at.iteration)).unwrap();
        }

        fn on_iteration_done(&mut self, at: &At, _batch: &BatchDescriptor, _loss: &Loss) {
            self.tx.send((self.id, "iteration_done", at.iteration)).unwrap();
        }
    }

    #[test]
    fn forwards_every_event_in_registration_order() {
        let (tx, rx) = mpsc::channel();
        let mut set = ListenerSet::new();
        set.push(Box::new(Recording { id: 0, tx: tx.clone() }));
        set.push(Box::new(Recording { id: 1, tx: tx.clone() }));
        drop(tx);

        let batch = BatchDescriptor::new(1, Some(8));
        set.on_epoch_start(&At::new(0, 0));
        set.on_iteration_start(&At::new(0, 1), &batch, 2);
        set.on_iteration_done(&At::new(0, 1), &batch, &Loss::single(0.5));
        set.on_epoch_end(&At::new(0, 1));
        drop(set);

        let events: Vec<_> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                (0, "epoch_start", 0),
                (1, "epoch_start", 0),
                (0, "iteration_start", 1),
                (1, "iteration_start", 1),
                (0, "iteration_done", 1),
                (1, "iteration_done", 1),
                (0, "epoch_end", 0),
                (1, "epoch_end", 0),
            ]
        );
    }

    #[test]
    fn default_set_is_empty() {
        assert!(ListenerSet::default().is_empty());
    }
}
