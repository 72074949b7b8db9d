//! HTTP error responses.

use crate::config::Environment;
use crate::order_repository::OrderError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

/// Message returned for every server-side failure in production.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// An error the API reports to the client as `{status: "error", message}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    detail: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            detail: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            detail: None,
        }
    }

    /// Maps an order operation failure to its response.
    ///
    /// Internal failures keep their message and a debug `detail` in
    /// development; production only ever says [`INTERNAL_ERROR_MESSAGE`].
    pub fn from_order(error: OrderError, environment: Environment) -> Self {
        match error {
            OrderError::Validation(message) => {
                warn!(%message, "Rejected order request");
                Self::bad_request(message)
            }
            OrderError::NotFound(id) => {
                warn!(%id, "Order not found");
                Self::not_found("Order not found")
            }
            internal @ OrderError::Internal(_) => {
                error!(error = %internal, "Order operation failed");
                if environment.is_production() {
                    Self {
                        status: StatusCode::INTERNAL_SERVER_ERROR,
                        message: INTERNAL_ERROR_MESSAGE.to_string(),
                        detail: None,
                    }
                } else {
                    Self {
                        status: StatusCode::INTERNAL_SERVER_ERROR,
                        message: internal.to_string(),
                        detail: Some(format!("{internal:?}")),
                    }
                }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Malformed request body");
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: "error",
            message: self.message,
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}
