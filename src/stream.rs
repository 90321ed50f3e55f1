pub mod notification;
pub mod observable;
pub mod observable_stream;
pub mod observer;
