use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::services::stock_client::StockCheckError;

/// Body of every 4xx/5xx answer except the bare 404.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    /// Raw failure text when the stock service could not be consulted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    InternalError(String),
    NotFound(String),
    BadRequest(String),
    StockCheck(StockCheckError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::StockCheck(e) => write!(f, "Stock check failed: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StockCheckError> for AppError {
    fn from(err: StockCheckError) -> Self {
        AppError::StockCheck(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                ErrorBody::new("Server configuration error")
            }
            AppError::InternalError(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorBody::new(msg.as_str())
            }
            // Missing entities answer with a bare 404.
            AppError::NotFound(ref msg) => {
                tracing::debug!("Not found: {}", msg);
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::BadRequest(ref msg) => ErrorBody::new(msg.as_str()),
            AppError::StockCheck(StockCheckError::Transport(ref details)) => {
                tracing::warn!("Stock service call failed: {}", details);
                ErrorBody {
                    error: "Failed to validate stock".to_string(),
                    details: Some(details.clone()),
                }
            }
            AppError::StockCheck(ref e) => {
                tracing::info!("Order rejected by stock check: {}", e);
                ErrorBody::new(e.to_string())
            }
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::StockCheck(_) => StatusCode::BAD_REQUEST,
        }
    }
}
