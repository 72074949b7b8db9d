//! Pure data structures shared by the catalog, the order store and the HTTP layer.
//!
//! Field names follow the storefront's JSON contract (camelCase on the wire).

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
