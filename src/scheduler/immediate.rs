use crate::Disposable;

use super::{ScheduledAction, Scheduler};

/// Runs every action synchronously on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn schedule(&self, action: ScheduledAction) -> Disposable {
        action(self)
    }
}

#[cfg(test)]
mod test {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use crate::{Disposable, Scheduler};

    use super::ImmediateScheduler;

    #[test]
    fn smoke() {
        let count = Arc::new(AtomicUsize::new(0));

        let handle = ImmediateScheduler.schedule({
            let count = Arc::clone(&count);

            Box::new(move |_: &dyn Scheduler| {
                count.fetch_add(1, Ordering::SeqCst);

                Disposable::empty()
            })
        });

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!handle.is_disposed());
    }

    #[test]
    fn returns_the_handle_of_the_action() {
        let inner = Disposable::empty();

        let handle = ImmediateScheduler.schedule({
            let inner = inner.clone();

            Box::new(move |_: &dyn Scheduler| inner)
        });

        handle.dispose().unwrap();

        assert!(inner.is_disposed());
    }
}
