//! Record trait implementation for the [`Order`] domain type.
//!
//! Identity comes from [`OrderId::random`]; everything else is already
//! validated and priced in the [`OrderDraft`] by the time it reaches the
//! store.

use super::OrderError;
use crate::model::{Order, OrderDraft, OrderId, OrderPatch};
use async_trait::async_trait;
use record_store::Record;
use tracing::debug;

#[async_trait]
impl Record for Order {
    type Id = OrderId;
    type Draft = OrderDraft;
    type Patch = OrderPatch;
    type Context = ();
    type Error = OrderError;

    fn generate_id() -> OrderId {
        OrderId::random()
    }

    fn from_draft(id: OrderId, draft: OrderDraft) -> Result<Self, Self::Error> {
        Ok(Order::new(id, draft))
    }

    /// Merges an order patch.
    ///
    /// # Fields Updated
    /// - `priority`: the flag only; prices and delivery estimate stay as placed
    /// - `status`: any status, from any status
    async fn apply_patch(&mut self, patch: OrderPatch, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(priority) = patch.priority {
            debug!(order_id = %self.id, from = self.priority, to = priority, "priority changed");
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            debug!(order_id = %self.id, from = ?self.status, to = ?status, "status changed");
            self.status = status;
        }
        Ok(())
    }
}
