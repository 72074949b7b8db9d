//! # StoreBacked Trait
//!
//! Shared plumbing for domain services built on top of a [`RecordClient`].
use crate::{Record, RecordClient, StoreError};
use async_trait::async_trait;

/// A domain service that keeps its records in a `RecordActor`.
///
/// Implementors supply the client and an error mapping and get a traced
/// `fetch` for free.
///
/// # Example
///
/// ```rust
/// use record_store::{Record, RecordClient, StoreBacked, StoreError};
/// # use async_trait::async_trait;
/// # #[derive(Clone, Debug)] struct Note { id: u32 }
/// # #[derive(Debug)] struct NoteDraft;
/// # #[derive(Debug)] struct NotePatch;
/// # #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
/// # #[async_trait]
/// # impl Record for Note {
/// #     type Id = u32; type Draft = NoteDraft; type Patch = NotePatch;
/// #     type Context = (); type Error = NoteError;
/// #     fn generate_id() -> u32 { 1 }
/// #     fn from_draft(id: u32, _: NoteDraft) -> Result<Self, NoteError> { Ok(Self { id }) }
/// #     async fn apply_patch(&mut self, _: NotePatch, _: &()) -> Result<(), NoteError> { Ok(()) }
/// # }
///
/// #[derive(Debug)]
/// struct NotesUnavailable(String);
///
/// struct NoteService {
///     store: RecordClient<Note>,
/// }
///
/// impl StoreBacked<Note> for NoteService {
///     type Error = NotesUnavailable;
///
///     fn store(&self) -> &RecordClient<Note> {
///         &self.store
///     }
///
///     fn map_error(e: StoreError) -> NotesUnavailable {
///         NotesUnavailable(e.to_string())
///     }
/// }
///
/// async fn lookup(service: &NoteService) -> Result<Option<Note>, NotesUnavailable> {
///     service.fetch(1).await
/// }
/// ```
#[async_trait]
pub trait StoreBacked<T: Record>: Send + Sync {
    /// The service's own error type.
    type Error: Send;

    /// The client the service reads and writes through.
    fn store(&self) -> &RecordClient<T>;

    /// Maps store failures onto the service's error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetches a record by id; `Ok(None)` when it does not exist.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.store().find_by_id(id).await.map_err(Self::map_error)
    }
}
