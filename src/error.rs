//! Error types for disposal and notification dispatch.

use thiserror::Error;

use crate::NotificationKind;

/// Boxed error produced by a fallible disposal action.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum RxError {
    #[error("disposal action failed")]
    Dispose(#[source] BoxError),

    #[error("no handler supplied for {0} notification")]
    MissingHandler(NotificationKind),
}

pub type Result<T> = std::result::Result<T, RxError>;
