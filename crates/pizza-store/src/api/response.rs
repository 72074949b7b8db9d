use serde::Serialize;

/// Success envelope: `{status: "success", data}`.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    status: &'static str,
    data: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

impl Default for Health {
    fn default() -> Self {
        Self {
            status: "OK",
            message: "Pizza Store API is running",
        }
    }
}
