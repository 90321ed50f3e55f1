//! Observers and schedulers used by the unit tests.

use std::{collections::VecDeque, sync::Arc};

use parking_lot::Mutex;

use crate::{Disposable, Notification, Observer, ScheduledAction, ScheduledItem, Scheduler};

/// Records every event it receives, in order.
pub(crate) struct Recorder<T, E> {
    calls: Arc<Mutex<Vec<Notification<T, E>>>>,
}

impl<T, E> Recorder<T, E> {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone, E: Clone> Recorder<T, E> {
    pub(crate) fn calls(&self) -> Vec<Notification<T, E>> {
        self.calls.lock().clone()
    }
}

impl<T, E> Clone for Recorder<T, E> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T, E> Observer<T, E> for Recorder<T, E> {
    fn on_next(&mut self, value: T) {
        self.calls.lock().push(Notification::Next(value));
    }

    fn on_error(&mut self, error: E) {
        self.calls.lock().push(Notification::Error(error));
    }

    fn on_completed(&mut self) {
        self.calls.lock().push(Notification::Complete);
    }
}

/// Queues work until [`run_all`](Self::run_all) is called.
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    queue: Arc<Mutex<VecDeque<ScheduledItem>>>,
}

impl ManualScheduler {
    pub(crate) fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Drains the queue, returning how many items actually ran.
    pub(crate) fn run_all(&self) -> usize {
        let mut ran = 0;

        loop {
            let Some(item) = self.queue.lock().pop_front() else {
                return ran;
            };

            if !item.is_cancelled() {
                ran += 1;
            }

            // the returned handle is the one `schedule` already gave out
            let _ = item.invoke(self);
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, action: ScheduledAction) -> Disposable {
        let item = ScheduledItem::new(action);
        let cancellation = item.cancellation();

        self.queue.lock().push_back(item);

        cancellation
    }
}
