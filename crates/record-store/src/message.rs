//! # Store Messages
//!
//! Requests sent from a [`RecordClient`](crate::RecordClient) to its
//! [`RecordActor`](crate::RecordActor). Each carries a oneshot sender the
//! actor answers on.

use crate::error::StoreError;
use crate::record::Record;
use tokio::sync::oneshot;

/// One-shot reply channel used by the actor.
pub type Reply<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request to the store actor.
///
/// There is no delete: records live for the whole process lifetime.
#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    Insert {
        draft: T::Draft,
        respond_to: Reply<T>,
    },
    Find {
        id: T::Id,
        respond_to: Reply<Option<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Reply<T>,
    },
    Count {
        respond_to: Reply<usize>,
    },
}
