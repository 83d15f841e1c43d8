use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;

use crate::{
    OrderState,
    error::{AppError, ErrorBody, Result},
    models::{ORDER_STATUS_MAX_LEN, Order, OrderRequest, OrderUpdateRequest},
    store::order_store,
    utils::extractors::{EntityId, JsonBody},
};

#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    responses((status = 200, description = "Every order, ordered by id", body = [Order]))
)]
pub async fn list_orders(State(state): State<OrderState>) -> Result<Json<Vec<Order>>> {
    let orders = order_store::find_all(&state.orders)?;

    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, body = Order),
        (status = 404, description = "No such order")
    )
)]
pub async fn get_order(State(state): State<OrderState>, EntityId(id): EntityId) -> Result<Json<Order>> {
    let order = order_store::find_by_id(&state.orders, id)?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;

    Ok(Json(order))
}

/// Validates stock with the stock service, then records a `Pending` order.
///
/// The check is advisory: stock is not decremented, so two concurrent orders
/// can both pass against the same quantity.
#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Created in the Pending state", body = Order),
        (status = 400, description = "Product missing, stock too low, or stock service unusable", body = ErrorBody)
    )
)]
pub async fn create_order(
    State(state): State<OrderState>,
    JsonBody(payload): JsonBody<OrderRequest>,
) -> Result<impl IntoResponse> {
    let product = state
        .stock
        .check_availability(payload.product_id, payload.quantity)
        .await?;

    let order = order_store::create_pending(
        &state.orders,
        payload.product_id,
        payload.quantity,
        Utc::now(),
    )?;

    tracing::info!(
        "Created order {} for product {} ({}), quantity {} of {} in stock",
        order.id,
        product.id,
        product.name.as_deref().unwrap_or("unnamed"),
        order.quantity,
        product.quantity
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/orders/{}", order.id))],
        Json(order),
    ))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    request_body = OrderUpdateRequest,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, body = ErrorBody),
        (status = 404, description = "No such order")
    )
)]
pub async fn update_order(
    State(state): State<OrderState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<OrderUpdateRequest>,
) -> Result<StatusCode> {
    if payload.status.chars().count() > ORDER_STATUS_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "status must be at most {} characters",
            ORDER_STATUS_MAX_LEN
        )));
    }

    let order = order_store::update(&state.orders, id, payload)?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;
    tracing::info!("Updated order {} to status {}", order.id, order.status);

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such order")
    )
)]
pub async fn delete_order(State(state): State<OrderState>, EntityId(id): EntityId) -> Result<StatusCode> {
    if !order_store::delete(&state.orders, id)? {
        return Err(AppError::NotFound(format!("Order {} not found", id)));
    }
    tracing::info!("Deleted order {}", id);

    Ok(StatusCode::NO_CONTENT)
}
