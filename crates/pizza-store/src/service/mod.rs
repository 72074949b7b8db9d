//! Domain services wrapping the record store clients.

pub mod order_service;

pub use order_service::*;
