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
    /// Stream for the [`materialize`](crate::RxExt::materialize) method.
    #[must_use = "streams do nothing unless polled"]
    pub struct Materialize<S: Stream> {
        #[pin]
        stream: Fuse<S>,
        is_done: bool,
    }
}

impl<S: Stream> Materialize<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            stream: stream.fuse(),
            is_done: false,
        }
    }
}

impl<S, T, E> FusedStream for Materialize<S>
where
    S: Stream<Item = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.is_done
    }
}

impl<S, T, E> Stream for Materialize<S>
where
    S: Stream<Item = Result<T, E>>,
{
    type Item = Notification<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.is_done {
            return Poll::Ready(None);
        }

        match ready!(this.stream.as_mut().poll_next(cx)) {
            Some(Ok(value)) => Poll::Ready(Some(Notification::Next(value))),
            Some(Err(error)) => {
                *this.is_done = true;

                Poll::Ready(Some(Notification::Error(error)))
            }
            None => {
                *this.is_done = true;

                Poll::Ready(Some(Notification::Complete))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_done {
            return (0, Some(0));
        }

        let (_, upper) = self.stream.size_hint();

        (1, upper.and_then(|it| it.checked_add(1)))
    }
}

#[cfg(test)]
mod test {
    use futures::{executor::block_on, stream, StreamExt};

    use crate::{Notification, RxExt};

    #[test]
    fn smoke() {
        let stream = stream::iter([Ok::<_, String>(1), Ok(2)]);

        block_on(async {
            let all_events = stream.materialize().collect::<Vec<_>>().await;

            assert_eq!(
                all_events,
                [
                    Notification::Next(1),
                    Notification::Next(2),
                    Notification::Complete
                ]
            );
        });
    }

    #[test]
    fn error_terminates() {
        let stream = stream::iter([Ok(1), Err("broken"), Ok(3)]);

        block_on(async {
            let all_events = stream.materialize().collect::<Vec<_>>().await;

            assert_eq!(
                all_events,
                [Notification::Next(1), Notification::Error("broken")]
            );
        });
    }

    #[test]
    fn empty_stream_completes() {
        let stream = stream::empty::<Result<i32, ()>>();

        block_on(async {
            let all_events = stream.materialize().collect::<Vec<_>>().await;

            assert_eq!(all_events, [Notification::Complete]);
        });
    }

    #[test]
    fn round_trip() {
        let stream = stream::iter([Ok(1), Ok(2), Err("broken")]);

        block_on(async {
            let all_events = stream
                .materialize()
                .dematerialize()
                .collect::<Vec<_>>()
                .await;

            assert_eq!(all_events, [Ok(1), Ok(2), Err("broken")]);
        });
    }
}
