//! # Order Repository
//!
//! Orders live in a [`RecordActor<Order>`](record_store::RecordActor): a single
//! task owns the collection and applies every insert and update in turn, so no
//! two orders can receive the same id and every update sees a consistent
//! record.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](record_store::Record) implementation for [`Order`]
//! - [`error`] - [`OrderError`], shared with the order service
//! - [`new()`] - factory for the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use pizza_store::order_repository;
//! use pizza_store::service::OrderService;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = order_repository::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let orders = OrderService::new(client);
//!     assert!(orders.get_order("no-such-order").await.is_err());
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use record_store::{RecordActor, RecordClient};

/// Creates the order store actor and its client.
pub fn new(buffer_size: usize) -> (RecordActor<Order>, RecordClient<Order>) {
    RecordActor::new(buffer_size)
}
