//! Customer orders.
//!
//! # Record Store
//! [`Order`] implements the [`Record`](record_store::Record) trait, so it is
//! owned by a [`RecordActor`](record_store::RecordActor). See
//! [`crate::order_repository`] for:
//! - Insert payload ([`OrderDraft`])
//! - Patch payload ([`OrderPatch`])

use crate::pricing::PriceBreakdown;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque, randomly generated order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// A fresh random (v4) identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Kitchen progress of an order.
///
/// The natural flow is `Preparing -> Ready -> Delivered`, but any value may be
/// set from any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Preparing,
    Ready,
    Delivered,
}

/// One product/quantity entry of a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog id of the product. Not checked against the catalog.
    pub pizza_id: u32,
    pub name: String,
    pub quantity: u32,
    /// Unit price captured when the line was added to the cart.
    pub unit_price: f64,
    /// Line total as sent by the client. Taken as is.
    pub total_price: f64,
}

impl CartLine {
    /// Builds a line whose total is `quantity * unit_price`.
    pub fn new(pizza_id: u32, name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            pizza_id,
            name: name.into(),
            quantity,
            unit_price,
            total_price: f64::from(quantity) * unit_price,
        }
    }
}

/// Delivery location. Range is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// A placed order as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub phone: String,
    pub address: String,
    pub cart: Vec<CartLine>,
    pub priority: bool,
    pub position: GeoPosition,
    pub order_price: f64,
    pub priority_price: f64,
    pub total_price: f64,
    pub estimated_delivery: DateTime<Utc>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a freshly placed order from its id and insert payload.
    ///
    /// The order starts out `Preparing`; prices and the delivery estimate are
    /// taken from the draft and never recomputed afterwards.
    pub fn new(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            id,
            customer: draft.customer,
            phone: draft.phone,
            address: draft.address,
            cart: draft.cart,
            priority: draft.priority,
            position: draft.position,
            order_price: draft.prices.order_price,
            priority_price: draft.prices.priority_price,
            total_price: draft.prices.total_price,
            estimated_delivery: draft.estimated_delivery,
            status: OrderStatus::Preparing,
            created_at: draft.created_at,
        }
    }
}

/// Body of a create-order request.
///
/// Every field is optional here so that a missing one is reported by the
/// order service as a validation error naming the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub cart: Option<Vec<CartLine>>,
    pub priority: Option<bool>,
    pub position: Option<GeoPosition>,
}

/// A validated, fully priced order that has not been given an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer: String,
    pub phone: String,
    pub address: String,
    pub cart: Vec<CartLine>,
    pub priority: bool,
    pub position: GeoPosition,
    pub prices: PriceBreakdown,
    pub estimated_delivery: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// The only fields of a placed order a client may change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderPatch {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn priority(priority: bool) -> Self {
        Self {
            priority: Some(priority),
            ..Self::default()
        }
    }
}
