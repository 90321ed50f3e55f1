use std::{
    pin::Pin,
    task::{Context, Poll},
};

use futures::{
    ready,
    stream::{Fuse, FusedStream},
    Stream, StreamExt,
};
use pin_project_lite::pin_project;

use crate::Notification;

pin_project! {
    /// Stream for the [`dematerialize`](crate::RxExt::dematerialize) method.
    #[must_use = "streams do nothing unless polled"]
    pub struct Dematerialize<S: Stream> {
        #[pin]
        stream: Fuse<S>,
        is_done: bool,
    }
}

impl<S: Stream> Dematerialize<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream: stream.fuse(),
            is_done: false,
        }
    }
}

impl<S, T, E> FusedStream for Dematerialize<S>
where
    S: Stream<Item = Notification<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.is_done
    }
}

impl<S, T, E> Stream for Dematerialize<S>
where
    S: Stream<Item = Notification<T, E>>,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.is_done {
            return Poll::Ready(None);
        }

        match ready!(this.stream.as_mut().poll_next(cx)) {
            Some(Notification::Next(value)) => Poll::Ready(Some(Ok(value))),
            Some(Notification::Error(error)) => {
                *this.is_done = true;

                Poll::Ready(Some(Err(error)))
            }
            Some(Notification::Complete) | None => {
                *this.is_done = true;

                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_done {
            return (0, Some(0));
        }

        let (_, upper) = self.stream.size_hint();

        (0, upper)
    }
}
