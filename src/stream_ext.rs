use futures::Stream;

use crate::Notification;

pub mod dematerialize;
pub mod materialize;

use dematerialize::Dematerialize;
use materialize::Materialize;

impl<S: ?Sized> RxExt for S where S: Stream {}

pub trait RxExt: Stream {
    /// Turns a stream of results into a stream of [`Notification`]s.
    ///
    /// `Ok` becomes `Next`, the first `Err` becomes `Error` and ends the
    /// stream, and exhaustion is reported as a single `Complete`.
    fn materialize<T, E>(self) -> Materialize<Self>
    where
        Self: Stream<Item = Result<T, E>> + Sized,
    {
        assert_stream::<Notification<T, E>, _>(Materialize::new(self))
    }

    /// The inverse of [`materialize`](RxExt::materialize).
    ///
    /// Nothing that follows an `Error` or `Complete` is surfaced.
    fn dematerialize<T, E>(self) -> Dematerialize<Self>
    where
        Self: Stream<Item = Notification<T, E>> + Sized,
    {
        assert_stream::<Result<T, E>, _>(Dematerialize::new(self))
    }
}

pub(crate) fn assert_stream<T, S>(stream: S) -> S
where
    S: Stream<Item = T>,
{
    stream
}
