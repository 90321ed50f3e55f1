use std::{fmt, sync::Arc};

use crate::{AnonymousObserver, BoxedObserver, Disposable, ObservableStream, Observer};

type SubscribeFn<T, E> = dyn Fn(BoxedObserver<T, E>) -> Disposable + Send + Sync;

/// A push-based sequence, built from a subscribe function.
///
/// Every call to [`subscribe`](Self::subscribe) runs the subscribe function
/// again for the new observer.
pub struct Observable<T, E> {
    subscribe: Arc<SubscribeFn<T, E>>,
}

impl<T: 'static, E: 'static> Observable<T, E> {
    pub fn create<F>(subscribe: F) -> Self
    where
        F: Fn(BoxedObserver<T, E>) -> Disposable + Send + Sync + 'static,
    {
        Self {
            subscribe: Arc::new(subscribe),
        }
    }

    /// Subscribes `observer`, returning the handle that cancels the subscription.
    pub fn subscribe<O>(&self, observer: O) -> Disposable
    where
        O: Observer<T, E> + Send + 'static,
    {
        (self.subscribe)(Box::new(observer))
    }

    pub fn subscribe_fn<N, Er, C>(&self, on_next: N, on_error: Er, on_completed: C) -> Disposable
    where
        N: FnMut(T) + Send + 'static,
        Er: FnMut(E) + Send + 'static,
        C: FnMut() + Send + 'static,
    {
        self.subscribe(AnonymousObserver::new(on_next, on_error, on_completed))
    }
}

impl<T: Send + 'static, E: Send + 'static> Observable<T, E> {
    /// Subscribes and exposes the events as a [`futures::Stream`] of results.
    pub fn into_stream(self) -> ObservableStream<T, E> {
        ObservableStream::new(&self)
    }
}

impl<T, E> Clone for Observable<T, E> {
    fn clone(&self) -> Self {
        Self {
            subscribe: Arc::clone(&self.subscribe),
        }
    }
}

impl<T, E> fmt::Debug for Observable<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}
