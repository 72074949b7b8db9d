//! # Pizza Store
//!
//! Order backend for a pizza storefront: a fixed menu, order placement with
//! priority pricing and delivery estimates, and order lookup and updates.
//!
//! ## Components
//!
//! - **[catalog]**: the read-only product list.
//! - **[pricing]**: pure price and delivery-time derivation.
//! - **[order_repository]**: orders owned by a [`record_store::RecordActor`].
//! - **[service]**: [`OrderService`](service::OrderService), the order
//!   operations with validation.
//! - **[lifecycle]**: starts and stops the store; sets up logging.
//! - **[api]**: the axum HTTP adapter.
//! - **[config]**: command-line and environment settings.
//!
//! ## Testing
//!
//! See [`record_store::mock`] for testing the order service without a running
//! store.

pub mod api;
pub mod catalog;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_repository;
pub mod pricing;
pub mod service;
