use std::{fmt, sync::Arc};

use parking_lot::Mutex;

use crate::Disposable;

use super::{ScheduledAction, Scheduler};

/// Deferred work that can be cancelled until it starts.
///
/// Meant for scheduler implementations that queue work: hand
/// [`cancellation`](Self::cancellation) back to the caller of `schedule`,
/// then [`invoke`](Self::invoke) the item when its turn comes. Once the item
/// has run, disposing the cancellation also disposes the handle the action
/// returned.
pub struct ScheduledItem {
    action: ScheduledAction,
    cancellation: Disposable,
    started: Arc<Mutex<Option<Disposable>>>,
}

impl ScheduledItem {
    pub fn new(action: ScheduledAction) -> Self {
        let started = Arc::new(Mutex::new(None::<Disposable>));
        let cancellation = {
            let started = Arc::clone(&started);

            Disposable::try_create(move || {
                let handle = started.lock().take();

                match handle {
                    Some(handle) => handle.dispose(),
                    None => Ok(()),
                }
            })
        };

        Self {
            action,
            cancellation,
            started,
        }
    }

    pub fn cancellation(&self) -> Disposable {
        self.cancellation.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_disposed()
    }

    /// Runs the action unless the item was cancelled, and returns the
    /// cancellation handle, which now also covers the action's own handle.
    /// Work already running is never interrupted; if the item is cancelled
    /// while the action runs, the action's handle is disposed as soon as it
    /// is returned.
    pub fn invoke(self, scheduler: &dyn Scheduler) -> Disposable {
        if self.is_cancelled() {
            tracing::trace!("skipping cancelled scheduled item");

            return self.cancellation;
        }

        let handle = (self.action)(scheduler);

        *self.started.lock() = Some(handle);

        if self.cancellation.is_disposed() {
            let handle = self.started.lock().take();

            if let Some(Err(error)) = handle.map(|it| it.dispose()) {
                tracing::warn!(%error, "failed to dispose handle of a cancelled scheduled item");
            }
        }

        self.cancellation
    }
}

impl fmt::Debug for ScheduledItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledItem")
            .field("is_cancelled", &self.is_cancelled())
            .finish_non_exhaustive()
    }
}
