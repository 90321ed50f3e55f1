use std::{fmt, sync::Arc};

use futures::{stream, Stream};
use paste::paste;

use crate::{
    error::{Result, RxError},
    scheduler::{ImmediateScheduler, Scheduler},
    Disposable, Observable, Observer,
};

/// One event of a push-based sequence, captured as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification<T, E> {
    Next(T),
    Error(E),
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Next,
    Error,
    Complete,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotificationKind::Next => "OnNext",
            NotificationKind::Error => "OnError",
            NotificationKind::Complete => "OnCompleted",
        })
    }
}

macro_rules! variant_accessors {
    ($($variant:ident($payload:ident)),+) => {
        paste! {
            $(
                pub fn [<is_ $variant:lower>](&self) -> bool {
                    matches!(self, Notification::$variant(_))
                }

                pub fn [<as_ $variant:lower>](&self) -> Option<&$payload> {
                    match self {
                        Notification::$variant(it) => Some(it),
                        _ => None,
                    }
                }

                pub fn [<into_ $variant:lower>](self) -> Option<$payload> {
                    match self {
                        Notification::$variant(it) => Some(it),
                        _ => None,
                    }
                }
            )+
        }
    };
}

impl<T, E> Notification<T, E> {
    variant_accessors!(Next(T), Error(E));

    pub fn is_complete(&self) -> bool {
        matches!(self, Notification::Complete)
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::Next(_) => NotificationKind::Next,
            Notification::Error(_) => NotificationKind::Error,
            Notification::Complete => NotificationKind::Complete,
        }
    }

    /// Only `Next` carries a value.
    pub fn has_value(&self) -> bool {
        self.is_next()
    }

    pub fn as_ref(&self) -> Notification<&T, &E> {
        match self {
            Notification::Next(value) => Notification::Next(value),
            Notification::Error(error) => Notification::Error(error),
            Notification::Complete => Notification::Complete,
        }
    }

    /// `None` for `Complete`.
    pub fn into_result(self) -> Option<std::result::Result<T, E>> {
        match self {
            Notification::Next(value) => Some(Ok(value)),
            Notification::Error(error) => Some(Err(error)),
            Notification::Complete => None,
        }
    }

    /// Invokes exactly one of the handlers, matching this notification,
    /// and returns what it produced.
    pub fn accept<R>(
        self,
        on_next: impl FnOnce(T) -> R,
        on_error: impl FnOnce(E) -> R,
        on_completed: impl FnOnce() -> R,
    ) -> R {
        match self {
            Notification::Next(value) => on_next(value),
            Notification::Error(error) => on_error(error),
            Notification::Complete => on_completed(),
        }
    }

    /// Invokes exactly one method of `observer`, matching this notification.
    pub fn accept_observer<O>(self, observer: &mut O)
    where
        O: Observer<T, E> + ?Sized,
    {
        match self {
            Notification::Next(value) => observer.on_next(value),
            Notification::Error(error) => observer.on_error(error),
            Notification::Complete => observer.on_completed(),
        }
    }

    /// Dispatches to a set of optional handlers.
    ///
    /// Fails with [`RxError::MissingHandler`] when the handler matching this
    /// notification was not supplied; no other handler is invoked in that case.
    pub fn accept_handlers<R>(self, handlers: Handlers<'_, T, E, R>) -> Result<R> {
        let kind = self.kind();
        let missing = || RxError::MissingHandler(kind);

        match self {
            Notification::Next(value) => handlers.on_next.map(|it| it(value)).ok_or_else(missing),
            Notification::Error(error) => handlers.on_error.map(|it| it(error)).ok_or_else(missing),
            Notification::Complete => handlers.on_completed.map(|it| it()).ok_or_else(missing),
        }
    }

    /// A one-shot stream replaying this notification.
    ///
    /// `Next` yields its value and ends, `Error` yields the error and ends,
    /// `Complete` ends immediately.
    pub fn into_stream(self) -> impl Stream<Item = std::result::Result<T, E>> {
        stream::iter(self.into_result())
    }
}

impl<T, E> Notification<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Same as [`to_observable_on`](Self::to_observable_on) with an [`ImmediateScheduler`].
    pub fn to_observable(&self) -> Observable<T, E> {
        self.to_observable_on(Arc::new(ImmediateScheduler))
    }

    /// An observable that replays this notification to each subscriber
    /// through `scheduler`.
    ///
    /// A replayed `Next` is followed by a completion. Disposing the returned
    /// subscription before the scheduled work runs suppresses the replay.
    pub fn to_observable_on(&self, scheduler: Arc<dyn Scheduler>) -> Observable<T, E> {
        let notification = self.clone();

        Observable::create(move |mut observer| {
            let notification = notification.clone();

            tracing::trace!(kind = %notification.kind(), "scheduling notification replay");

            scheduler.schedule(Box::new(move |_: &dyn Scheduler| {
                let has_value = notification.has_value();

                notification.accept_observer(&mut observer);

                if has_value {
                    observer.on_completed();
                }

                Disposable::empty()
            }))
        })
    }
}

impl<T, E> From<std::result::Result<T, E>> for Notification<T, E> {
    fn from(value: std::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Notification::Next(value),
            Err(error) => Notification::Error(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Notification<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Next(value) => write!(f, "OnNext({value})"),
            Notification::Error(error) => write!(f, "OnError({error})"),
            Notification::Complete => f.write_str("OnCompleted()"),
        }
    }
}

type Handler<'a, A, R> = Box<dyn FnOnce(A) -> R + 'a>;

/// Optional handlers for [`Notification::accept_handlers`].
pub struct Handlers<'a, T, E, R> {
    on_next: Option<Handler<'a, T, R>>,
    on_error: Option<Handler<'a, E, R>>,
    on_completed: Option<Box<dyn FnOnce() -> R + 'a>>,
}

impl<'a, T, E, R> Handlers<'a, T, E, R> {
    pub fn new() -> Self {
        Self {
            on_next: None,
            on_error: None,
            on_completed: None,
        }
    }

    pub fn on_next(mut self, f: impl FnOnce(T) -> R + 'a) -> Self {
        self.on_next = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl FnOnce(E) -> R + 'a) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn on_completed(mut self, f: impl FnOnce() -> R + 'a) -> Self {
        self.on_completed = Some(Box::new(f));
        self
    }
}

impl<T, E, R> Default for Handlers<'_, T, E, R> {
    fn default() -> Self {
        Self::new()
    }
}
