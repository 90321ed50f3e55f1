use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use parking_lot::Mutex;

use crate::error::{BoxError, Result, RxError};

type Action = Box<dyn FnOnce() -> std::result::Result<(), BoxError> + Send>;

struct Inner {
    is_disposed: AtomicBool,
    action: Mutex<Option<Action>>,
}

/// A handle that releases a resource at most once.
///
/// Clones share the same state, so disposing any clone disposes all of them.
/// Dropping a handle does not dispose it.
#[derive(Clone)]
pub struct Disposable {
    inner: Arc<Inner>,
}

impl Disposable {
    /// Creates a handle that runs `action` on the first call to [`dispose`](Self::dispose).
    pub fn create<F>(action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::from_action(Box::new(move || {
            action();

            Ok(())
        }))
    }

    /// Like [`create`](Self::create), but the action may fail.
    ///
    /// The failure is returned from the `dispose` call that ran the action.
    /// A failed action is not retried by later calls.
    pub fn try_create<F, E>(action: F) -> Self
    where
        F: FnOnce() -> std::result::Result<(), E> + Send + 'static,
        E: Into<BoxError>,
    {
        Self::from_action(Box::new(move || action().map_err(Into::into)))
    }

    /// A handle whose disposal does no work.
    pub fn empty() -> Self {
        Self::from_action(Box::new(|| Ok(())))
    }

    fn from_action(action: Action) -> Self {
        Self {
            inner: Arc::new(Inner {
                is_disposed: AtomicBool::new(false),
                action: Mutex::new(Some(action)),
            }),
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed.load(Ordering::Acquire)
    }

    /// Runs the wrapped action if this is the first call, otherwise does nothing.
    ///
    /// The handle is marked disposed before the action runs, which makes
    /// re-entrant and racing calls no-ops. Losing racers return immediately,
    /// possibly before the winning caller's action has finished. The action
    /// runs without any lock held.
    pub fn dispose(&self) -> Result<()> {
        if self.inner.is_disposed.swap(true, Ordering::AcqRel) {
            tracing::trace!("disposable already disposed");

            return Ok(());
        }

        let action = self.inner.action.lock().take();

        match action {
            Some(action) => {
                tracing::trace!("running disposal action");

                action().map_err(|error| {
                    tracing::debug!(%error, "disposal action failed");

                    RxError::Dispose(error)
                })
            }
            None => Ok(()),
        }
    }
}

impl Default for Disposable {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Disposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposable")
            .field("is_disposed", &self.is_disposed())
            .finish()
    }
}
