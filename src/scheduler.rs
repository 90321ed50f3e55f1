mod immediate;
mod scheduled_item;

pub use immediate::ImmediateScheduler;
pub use scheduled_item::ScheduledItem;

use crate::Disposable;

/// A unit of work handed to a [`Scheduler`].
///
/// The action receives the scheduler running it and returns the handle that
/// releases whatever it started.
pub type ScheduledAction = Box<dyn FnOnce(&dyn Scheduler) -> Disposable + Send>;

/// Decides when and where scheduled work runs.
pub trait Scheduler: Send + Sync {
    /// Schedules `action`, returning a handle that cancels it if disposed
    /// before it starts.
    fn schedule(&self, action: ScheduledAction) -> Disposable;
}

impl<S: Scheduler + ?Sized> Scheduler for std::sync::Arc<S> {
    fn schedule(&self, action: ScheduledAction) -> Disposable {
        (**self).schedule(action)
    }
}
