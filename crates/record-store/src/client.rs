//! # Record Client
//!
//! The handle every caller uses to reach a [`RecordActor`](crate::RecordActor).

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use tokio::sync::{mpsc, oneshot};

/// A cloneable, type-safe handle to a running `RecordActor<T>`.
///
/// Cloning only clones the channel sender. The actor shuts down once the last
/// clone is dropped.
pub struct RecordClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Record> Clone for RecordClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Stores a new record built from `draft` and returns it with its
    /// generated id.
    pub async fn insert(&self, draft: T::Draft) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Insert { draft, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    /// Looks a record up by exact id. `Ok(None)` means it does not exist.
    pub async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Find { id, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    /// Merges `patch` into the stored record and returns the result.
    ///
    /// Fails with [`StoreError::NotFound`] when no record has this id.
    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update {
                id,
                patch,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Count { respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}
