use std::{
    pin::Pin,
    task::{Context, Poll},
};

use futures::{
    channel::mpsc::{self, UnboundedReceiver},
    stream::FusedStream,
    Stream,
};
use pin_project_lite::pin_project;

use crate::{
    from_notifier, stream_ext::dematerialize::Dematerialize, Disposable, Notification, Observable,
};

pin_project! {
    /// Stream for the [`into_stream`](Observable::into_stream) method.
    ///
    /// Ends after the first error or completion. Dropping the stream disposes
    /// the subscription it holds.
    #[must_use = "streams do nothing unless polled"]
    pub struct ObservableStream<T, E> {
        #[pin]
        stream: Dematerialize<UnboundedReceiver<Notification<T, E>>>,
        subscription: Disposable,
    }

    impl<T, E> PinnedDrop for ObservableStream<T, E> {
        fn drop(this: Pin<&mut Self>) {
            if let Err(error) = this.project().subscription.dispose() {
                tracing::warn!(%error, "failed to dispose observable stream subscription");
            }
        }
    }
}

impl<T: Send + 'static, E: Send + 'static> ObservableStream<T, E> {
    pub(crate) fn new(observable: &Observable<T, E>) -> Self {
        let (sender, receiver) = mpsc::unbounded();
        let subscription = observable.subscribe(from_notifier(move |it: Notification<T, E>| {
            if sender.unbounded_send(it).is_err() {
                tracing::trace!("observable stream is gone, dropping notification");
            }
        }));

        Self {
            stream: Dematerialize::new(receiver),
            subscription,
        }
    }
}

impl<T, E> ObservableStream<T, E> {
    pub fn subscription(&self) -> &Disposable {
        &self.subscription
    }
}

impl<T, E> FusedStream for ObservableStream<T, E> {
    fn is_terminated(&self) -> bool {
        self.stream.is_terminated()
    }
}

impl<T, E> Stream for ObservableStream<T, E> {
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}
