use crate::catalog::Catalog;
use crate::order_repository;
use crate::service::OrderService;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Failures while stopping the store system.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A background store task panicked or was cancelled.
    #[error("Store task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// The running storefront: the read-only catalog plus the order service backed
/// by a live order store.
///
/// # Example
///
/// ```rust
/// use pizza_store::catalog::Catalog;
/// use pizza_store::lifecycle::StoreSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), pizza_store::lifecycle::LifecycleError> {
///     let system = StoreSystem::new(Catalog::pizzas(), 32);
///     assert_eq!(system.catalog.list_products().len(), 6);
///     system.shutdown().await
/// }
/// ```
pub struct StoreSystem {
    /// Products offered by the store.
    pub catalog: Arc<Catalog>,

    /// Client-facing order operations.
    pub orders: OrderService,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns the order store with a mailbox of `buffer_size` requests.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(catalog: Catalog, buffer_size: usize) -> Self {
        let (order_actor, order_store) = order_repository::new(buffer_size);
        let order_handle = tokio::spawn(order_actor.run(()));

        info!(
            products = catalog.list_products().len(),
            buffer_size, "Store system started"
        );

        Self {
            catalog: Arc::new(catalog),
            orders: OrderService::new(order_store),
            handles: vec![order_handle],
        }
    }

    /// Stops the order store and waits for it to finish.
    ///
    /// Returns once every other clone of [`orders`](Self::orders) is dropped
    /// too. Fails if the store task panicked.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down store system...");

        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                return Err(e.into());
            }
        }

        info!("Store system shutdown complete.");
        Ok(())
    }
}
