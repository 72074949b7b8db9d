//! # Order Service
//!
//! The operations the storefront exposes for orders. It validates and prices
//! new orders before handing them to the order store, and narrows updates to
//! the two fields a client may change.
use crate::model::{CreateOrderRequest, Order, OrderDraft, OrderId, OrderPatch};
use crate::order_repository::OrderError;
use crate::pricing::{compute_delivery, compute_prices};
use chrono::{DateTime, Utc};
use record_store::{RecordClient, StoreBacked, StoreError};
use tracing::{debug, info, instrument};

/// Client-facing order operations.
///
/// Holds no orders itself: every call goes through the order store, so clones
/// of the service all see the same data.
#[derive(Clone)]
pub struct OrderService {
    store: RecordClient<Order>,
}

impl StoreBacked<Order> for OrderService {
    type Error = OrderError;

    fn store(&self) -> &RecordClient<Order> {
        &self.store
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from(e)
    }
}

impl OrderService {
    pub fn new(store: RecordClient<Order>) -> Self {
        Self { store }
    }

    /// Places a new order.
    ///
    /// The creation time is captured once and used both as `createdAt` and as
    /// the base of the delivery estimate. The stored order starts out
    /// `preparing`.
    ///
    /// # Errors
    /// [`OrderError::Validation`] when a required field is missing or blank, or
    /// a cart line has no quantity. Nothing is stored in that case.
    #[instrument(skip(self, request))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        debug!(?request, "create_order called");
        let draft = draft_order(request, Utc::now())?;

        let order = self.store.insert(draft).await?;
        info!(
            order_id = %order.id,
            priority = order.priority,
            total_price = order.total_price,
            "Order placed"
        );
        Ok(order)
    }

    /// Fetches an order by id.
    ///
    /// A string that is not a well-formed order id is reported as not found,
    /// the same as an unknown id.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: &str) -> Result<Order, OrderError> {
        let order_id = parse_order_id(id)?;
        self.fetch(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Applies a patch to an existing order and returns the merged order.
    ///
    /// Only `priority` and `status` can change. Prices and the delivery
    /// estimate keep their values from when the order was placed, and any
    /// status may follow any other.
    #[instrument(skip(self))]
    pub async fn update_order(&self, id: &str, patch: OrderPatch) -> Result<Order, OrderError> {
        let order_id = parse_order_id(id)?;
        let order = self.store.update(order_id, patch).await?;
        info!(order_id = %order.id, status = ?order.status, priority = order.priority, "Order updated");
        Ok(order)
    }

    /// Number of orders currently stored.
    #[instrument(skip(self))]
    pub async fn order_count(&self) -> Result<usize, OrderError> {
        Ok(self.store.count().await?)
    }
}

fn parse_order_id(id: &str) -> Result<OrderId, OrderError> {
    id.parse()
        .map_err(|_| OrderError::NotFound(id.to_string()))
}

/// Validates a create-order request and derives its prices and delivery
/// estimate for an order placed at `now`.
///
/// `priority` defaults to `false`; every other field is required.
pub fn draft_order(
    request: CreateOrderRequest,
    now: DateTime<Utc>,
) -> Result<OrderDraft, OrderError> {
    let customer = required_text(request.customer, "customer")?;
    let phone = required_text(request.phone, "phone")?;
    let address = required_text(request.address, "address")?;
    let cart = request.cart.ok_or_else(|| missing("cart"))?;
    let position = request.position.ok_or_else(|| missing("position"))?;
    let priority = request.priority.unwrap_or(false);

    if let Some(line) = cart.iter().find(|line| line.quantity == 0) {
        return Err(OrderError::Validation(format!(
            "cart line for pizza {} has zero quantity",
            line.pizza_id
        )));
    }

    Ok(OrderDraft {
        customer,
        phone,
        address,
        prices: compute_prices(&cart, priority),
        cart,
        priority,
        position,
        estimated_delivery: compute_delivery(now, priority),
        created_at: now,
    })
}

fn required_text(value: Option<String>, field: &str) -> Result<String, OrderError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(OrderError::Validation(format!("{field} must not be blank"))),
        None => Err(missing(field)),
    }
}

fn missing(field: &str) -> OrderError {
    OrderError::Validation(format!("missing required field: {field}"))
}
