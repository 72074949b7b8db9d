//! # HTTP API
//!
//! JSON over HTTP on top of the catalog and the order service.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | `GET` | `/health` | 200 `{status: "OK", message}` |
//! | `GET` | `/api/menu` | 200 `{status: "success", data: Product[]}` |
//! | `POST` | `/api/order` | 201 `{status: "success", data: Order}` |
//! | `GET` | `/api/order/{orderId}` | 200 `{status: "success", data: Order}` |
//! | `PATCH` | `/api/order/{orderId}` | 200 `{status: "success", data: Order}` |
//!
//! Failures are `{status: "error", message}` with 400 for a malformed body or
//! missing field, 404 for an unknown order or route (including a wrong method
//! on a known path), and 500 otherwise.

pub mod error;
pub mod handlers;
pub mod response;

pub use error::ApiError;

use crate::catalog::Catalog;
use crate::config::Environment;
use crate::lifecycle::StoreSystem;
use crate::service::OrderService;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub orders: OrderService,
    pub environment: Environment,
}

impl AppState {
    pub fn new(system: &StoreSystem, environment: Environment) -> Self {
        Self {
            catalog: system.catalog.clone(),
            orders: system.orders.clone(),
            environment,
        }
    }
}

/// Builds the application router.
///
/// A known path with an unsupported method is answered like an unknown route.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/menu", get(handlers::get_menu))
        .route("/order", post(handlers::create_order))
        .route(
            "/order/{order_id}",
            get(handlers::get_order).patch(handlers::update_order),
        )
        .method_not_allowed_fallback(handlers::not_found);

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
