//! # System Lifecycle
//!
//! Starts the order store, wires it to the services and stops it again.
//!
//! The store actor runs in its own task and exits once every client handle is
//! gone. Shutdown therefore means dropping the clients and awaiting the task:
//!
//! 1. **Drop clients** - closes the sender side of the mailbox
//! 2. **Actor drains** - `recv()` returns `None` after the queued requests
//! 3. **Await** - the task handle resolves, or reports a panic
//!
//! Every [`OrderService`](crate::service::OrderService) clone is a client, so
//! the HTTP server has to be stopped (and its state dropped) before
//! [`StoreSystem::shutdown`] can finish.
//!
//! [`setup_tracing`] installs the log subscriber; call it once per process.

pub mod store_system;
pub mod tracing;

pub use self::store_system::*;
pub use self::tracing::setup_tracing;
