//! # Record Actor
//!
//! The server half of the store. It owns the collection and the receiving end
//! of the request channel, and processes requests strictly one at a time.

use crate::client::RecordClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Owns every record of type `T` for the lifetime of the process.
///
/// No `Mutex` guards `store`: the actor is its only accessor, and the request
/// loop never interleaves two requests.
///
/// ## Operations
///
/// * **Insert**: generates an id with [`Record::generate_id`], refuses it if
///   already present, builds the record with [`Record::from_draft`], runs
///   [`Record::on_insert`], stores it and replies with the stored copy.
/// * **Find**: replies with a clone of the record, or `None`.
/// * **Update**: applies the patch to a copy of the stored record and swaps the
///   copy in only if [`Record::apply_patch`] succeeded, so a failed patch
///   leaves the stored record untouched.
/// * **Count**: replies with the number of stored records.
pub struct RecordActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: Record> RecordActor<T> {
    /// Creates the actor and its first client.
    ///
    /// `buffer_size` is the mailbox capacity; clients wait when it is full.
    /// The actor does nothing until [`run`](Self::run) is spawned.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, RecordClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { draft, respond_to } => {
                    debug!(entity_type, ?draft, "Insert");
                    let result = self.insert(draft, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, size = self.store.len(), "Inserted"),
                        Err(StoreError::DuplicateId(id)) => {
                            error!(entity_type, %id, "Generated id already stored")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Insert failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Find { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Find");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?patch, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut merged = current.clone();
                    match merged.apply_patch(patch, &context).await {
                        Ok(()) => {
                            self.store.insert(id.clone(), merged.clone());
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(merged));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn insert(&mut self, draft: T::Draft, context: &T::Context) -> Result<T, StoreError> {
        let id = T::generate_id();
        if self.store.contains_key(&id) {
            return Err(StoreError::DuplicateId(id.to_string()));
        }

        let mut item =
            T::from_draft(id.clone(), draft).map_err(|e| StoreError::Record(Box::new(e)))?;
        item.on_insert(context)
            .await
            .map_err(|e| StoreError::Record(Box::new(e)))?;

        self.store.insert(id, item.clone());
        Ok(item)
    }
}
