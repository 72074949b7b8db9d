//! # Record Trait
//!
//! The contract a type must satisfy to be kept in a [`RecordActor`](crate::RecordActor).
//!
//! Associated types tie each record to its own payloads: an `Order` store only
//! accepts an order draft on insert and an order patch on update, and the
//! compiler rejects anything else.
//!
//! Identity is generated by the store, never by the caller. The actor asks
//! [`Record::generate_id`] for a fresh id on every insert and then builds the
//! record with [`Record::from_draft`].

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A value that can be owned and served by a `RecordActor`.
///
/// `on_insert` has a default no-op implementation; `apply_patch` must be
/// provided because the patch shape is specific to every record.
///
/// # Context
/// `Context` is handed to `run()` and passed to every hook, so a record can
/// reach dependencies that only exist once the system is wired. Use `()` when
/// there are none.
#[async_trait]
pub trait Record: Clone + Send + Sync + 'static {
    /// Unique identifier. Must be cheap to clone and printable for logs.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Everything needed to build a record except its identity.
    type Draft: Send + Sync + Debug;

    /// A partial set of fields merged into an existing record.
    type Patch: Send + Sync + Debug;

    /// Dependencies injected at `run()` time.
    type Context: Send + Sync;

    /// The record's own error type, boxed into
    /// [`StoreError::Record`](crate::StoreError::Record) by the actor.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produces a fresh identifier for a new record.
    ///
    /// Implementations should be collision resistant; the actor still
    /// refuses an id that is already stored.
    fn generate_id() -> Self::Id;

    /// Builds the record from its assigned id and the insert payload.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Result<Self, Self::Error>;

    /// Runs after construction and before the record is stored.
    /// Returning an error aborts the insert.
    async fn on_insert(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merges `patch` into `self`. Fields absent from the patch must keep
    /// their current values.
    async fn apply_patch(
        &mut self,
        patch: Self::Patch,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
