use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

use crate::{CatalogState, OrderState, error::Result, store::MemoryStore};

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

fn ready<T>(store: &MemoryStore<T>) -> Result<(StatusCode, Json<Value>)> {
    store.check_health()?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "store": "available"
        })),
    ))
}

pub async fn catalog_readiness(State(state): State<CatalogState>) -> Result<impl IntoResponse> {
    ready(&state.products)
}

pub async fn order_readiness(State(state): State<OrderState>) -> Result<impl IntoResponse> {
    ready(&state.orders)
}
