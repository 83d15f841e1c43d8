use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ORDER_STATUS_MAX_LEN: usize = 64;

/// The only status the service assigns on its own.
pub const STATUS_PENDING: &str = "Pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Free-form. Observed values are Pending, Completed and Cancelled.
    #[schema(max_length = 64, example = "Pending")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// Request types

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdateRequest {
    pub quantity: i32,
    #[schema(max_length = 64)]
    pub status: String,
}
