use futures::{executor::block_on, stream, StreamExt};
use futures_rx_core::prelude::*;

fn main() {
    let source = stream::iter(vec![Ok(1), Ok(2), Err("sensor offline"), Ok(3)]);

    block_on(async {
        let notifications = source.materialize().collect::<Vec<_>>().await;

        for notification in &notifications {
            println!("{notification}");
        }

        let replayed = notifications
            .iter()
            .map(|it| it.to_observable().into_stream())
            .collect::<Vec<_>>();

        for stream in replayed {
            println!("{:?}", stream.collect::<Vec<_>>().await);
        }
    });

    let subscription = Disposable::create(|| println!("released"));

    subscription.dispose().unwrap();
    subscription.dispose().unwrap();
}
