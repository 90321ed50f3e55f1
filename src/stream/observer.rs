use crate::Notification;

/// Receives the events of a push-based sequence.
pub trait Observer<T, E> {
    fn on_next(&mut self, value: T);
    fn on_error(&mut self, error: E);
    fn on_completed(&mut self);
}

pub type BoxedObserver<T, E> = Box<dyn Observer<T, E> + Send>;

impl<T, E, O: Observer<T, E> + ?Sized> Observer<T, E> for Box<O> {
    fn on_next(&mut self, value: T) {
        (**self).on_next(value)
    }

    fn on_error(&mut self, error: E) {
        (**self).on_error(error)
    }

    fn on_completed(&mut self) {
        (**self).on_completed()
    }
}

impl<T, E, O: Observer<T, E> + ?Sized> Observer<T, E> for &mut O {
    fn on_next(&mut self, value: T) {
        (**self).on_next(value)
    }

    fn on_error(&mut self, error: E) {
        (**self).on_error(error)
    }

    fn on_completed(&mut self) {
        (**self).on_completed()
    }
}

/// An observer built from three closures.
pub struct AnonymousObserver<N, Er, C> {
    on_next: N,
    on_error: Er,
    on_completed: C,
}

impl<N, Er, C> AnonymousObserver<N, Er, C> {
    pub fn new(on_next: N, on_error: Er, on_completed: C) -> Self {
        Self {
            on_next,
            on_error,
            on_completed,
        }
    }
}

impl<T, E, N, Er, C> Observer<T, E> for AnonymousObserver<N, Er, C>
where
    N: FnMut(T),
    Er: FnMut(E),
    C: FnMut(),
{
    fn on_next(&mut self, value: T) {
        (self.on_next)(value)
    }

    fn on_error(&mut self, error: E) {
        (self.on_error)(error)
    }

    fn on_completed(&mut self) {
        (self.on_completed)()
    }
}

/// Observer returned by [`from_notifier`].
pub struct NotifierObserver<F> {
    handler: F,
}

impl<T, E, F> Observer<T, E> for NotifierObserver<F>
where
    F: FnMut(Notification<T, E>),
{
    fn on_next(&mut self, value: T) {
        (self.handler)(Notification::Next(value))
    }

    fn on_error(&mut self, error: E) {
        (self.handler)(Notification::Error(error))
    }

    fn on_completed(&mut self) {
        (self.handler)(Notification::Complete)
    }
}

/// Turns a consumer of notifications into an observer.
///
/// Every event received by the returned observer is wrapped in the matching
/// [`Notification`] and passed to `handler`.
pub fn from_notifier<T, E, F>(handler: F) -> NotifierObserver<F>
where
    F: FnMut(Notification<T, E>),
{
    NotifierObserver { handler }
}

#[cfg(test)]
mod test {
    use crate::{Notification, Observer};

    use super::{from_notifier, AnonymousObserver};

    #[test]
    fn smoke() {
        let mut received = Vec::new();

        {
            let mut observer = from_notifier(|it: Notification<i32, &str>| received.push(it));

            observer.on_next(1);
            observer.on_error("bad");
            observer.on_completed();
        }

        assert_eq!(
            received,
            [
                Notification::Next(1),
                Notification::Error("bad"),
                Notification::Complete
            ]
        );
    }

    #[test]
    fn each_event_reaches_the_handler_once() {
        let mut calls = 0;

        {
            let mut observer = from_notifier(|it: Notification<&str, ()>| {
                calls += 1;

                assert_eq!(it, Notification::Next("only"));
            });

            observer.on_next("only");
        }

        assert_eq!(calls, 1);
    }

    #[test]
    fn anonymous_observer() {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        let mut completions = 0;

        {
            let mut observer = AnonymousObserver::new(
                |it: i32| values.push(it),
                |it: String| errors.push(it),
                || completions += 1,
            );

            Notification::<i32, String>::Next(3).accept_observer(&mut observer);
            Notification::<i32, String>::Error("e".into()).accept_observer(&mut observer);
            Notification::<i32, String>::Complete.accept_observer(&mut observer);
        }

        assert_eq!(values, [3]);
        assert_eq!(errors, ["e"]);
        assert_eq!(completions, 1);
    }

    #[test]
    fn boxed_and_borrowed_observers_forward() {
        let mut received = Vec::new();

        {
            let mut inner = from_notifier(|it: Notification<i32, ()>| received.push(it));
            let mut borrowed: Box<dyn Observer<i32, ()> + '_> = Box::new(&mut inner);

            borrowed.on_next(1);
            borrowed.on_completed();
        }

        assert_eq!(received, [Notification::Next(1), Notification::Complete]);
    }
}
