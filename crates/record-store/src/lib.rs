//! # Record Store
//!
//! An in-memory, actor-owned record store. One [`RecordActor`] task owns the
//! collection and is its single writer; any number of cloned [`RecordClient`]
//! handles send it requests over a channel and await the reply.
//!
//! ## Why an actor?
//!
//! The collection is never shared behind a lock. Every insert, lookup and
//! update is a message processed to completion before the next one starts, so
//! two inserts can never race for the same identifier and an update always
//! works on a consistent snapshot of the record.
//!
//! ## Core Abstractions
//!
//! - [`Record`] - what a stored type must provide: identity generation,
//!   construction from a validated draft, and a field-scoped patch.
//! - [`RecordActor`] - the server half that owns the `HashMap`.
//! - [`RecordClient`] - the cloneable, type-safe handle.
//! - [`StoreBacked`] - a helper trait for services that wrap a client.
//!
//! ## Example
//!
//! ```rust
//! use record_store::{Record, RecordActor};
//! use async_trait::async_trait;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! static NEXT: AtomicU32 = AtomicU32::new(1);
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u32, text: String, pinned: bool }
//! #[derive(Debug)] struct NoteDraft { text: String }
//! #[derive(Debug)] struct NotePatch { pinned: Option<bool> }
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl Record for Note {
//!     type Id = u32;
//!     type Draft = NoteDraft;
//!     type Patch = NotePatch;
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn generate_id() -> u32 { NEXT.fetch_add(1, Ordering::Relaxed) }
//!
//!     fn from_draft(id: u32, draft: NoteDraft) -> Result<Self, NoteError> {
//!         Ok(Self { id, text: draft.text, pinned: false })
//!     }
//!
//!     async fn apply_patch(&mut self, patch: NotePatch, _: &()) -> Result<(), NoteError> {
//!         if let Some(pinned) = patch.pinned { self.pinned = pinned; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = RecordActor::<Note>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let note = client.insert(NoteDraft { text: "dough".into() }).await.unwrap();
//!     let pinned = client.update(note.id, NotePatch { pinned: Some(true) }).await.unwrap();
//!     assert!(pinned.pinned);
//!     assert_eq!(pinned.text, "dough");
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockStore`, which answers client requests from
//! scripted expectations instead of a running actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;
pub mod service;

pub use actor::RecordActor;
pub use client::RecordClient;
pub use error::StoreError;
pub use message::{Reply, StoreRequest};
pub use record::Record;
pub use service::StoreBacked;
