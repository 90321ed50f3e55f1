//! Disposables and reified notifications for push-based sequences.
//!
//! - [`Disposable`] releases a resource at most once, no matter how many
//!   clones race to dispose it.
//! - [`Notification`] captures a single `Next`, `Error` or `Complete` event as
//!   data, dispatches it to handlers or an [`Observer`], and replays it as an
//!   [`Observable`] through a [`Scheduler`].
//! - [`from_notifier`] goes the other way, turning a consumer of notifications
//!   into an observer.
//! - [`RxExt`] materializes and dematerializes `futures` streams.

pub mod disposable;
pub mod error;
pub mod scheduler;
pub mod stream;
pub mod stream_ext;

#[cfg(test)]
pub(crate) mod testing;

pub use disposable::Disposable;
pub use error::{BoxError, Result, RxError};
pub use scheduler::{ImmediateScheduler, ScheduledAction, ScheduledItem, Scheduler};
pub use stream::notification::{Handlers, Notification, NotificationKind};
pub use stream::observable::Observable;
pub use stream::observable_stream::ObservableStream;
pub use stream::observer::{
    from_notifier, AnonymousObserver, BoxedObserver, NotifierObserver, Observer,
};
pub use stream_ext::RxExt;

pub mod prelude {
    pub use crate::scheduler::*;
    pub use crate::stream::notification::*;
    pub use crate::stream::observable::*;
    pub use crate::stream::observer::*;
    pub use crate::stream_ext::RxExt;
    pub use crate::{Disposable, Result, RxError};
}
