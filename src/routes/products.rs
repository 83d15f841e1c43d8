use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    CatalogState,
    error::{AppError, ErrorBody, Result},
    models::{PRODUCT_NAME_MAX_LEN, Product, ProductRequest},
    store::product_store,
    utils::extractors::{EntityId, JsonBody},
};

fn validate(payload: &ProductRequest) -> Result<()> {
    if payload.name.chars().count() > PRODUCT_NAME_MAX_LEN {
        return Err(AppError::BadRequest(format!(
            "name must be at most {} characters",
            PRODUCT_NAME_MAX_LEN
        )));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses((status = 200, description = "Every product, ordered by id", body = [Product]))
)]
pub async fn list_products(State(state): State<CatalogState>) -> Result<Json<Vec<Product>>> {
    let products = product_store::find_all(&state.products)?;

    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, body = Product),
        (status = 404, description = "No such product")
    )
)]
pub async fn get_product(
    State(state): State<CatalogState>,
    EntityId(id): EntityId,
) -> Result<Json<Product>> {
    let product = product_store::find_by_id(&state.products, id)?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Created, with a Location header", body = Product),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn create_product(
    State(state): State<CatalogState>,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> Result<impl IntoResponse> {
    validate(&payload)?;

    let product = product_store::create(&state.products, payload)?;
    tracing::info!("Created product {} ({})", product.id, product.name);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/products/{}", product.id))],
        Json(product),
    ))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, body = Product),
        (status = 400, body = ErrorBody),
        (status = 404, description = "No such product")
    )
)]
pub async fn update_product(
    State(state): State<CatalogState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<ProductRequest>,
) -> Result<Json<Product>> {
    validate(&payload)?;

    let product = product_store::update(&state.products, id, payload)?
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;
    tracing::info!("Updated product {}", id);

    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No such product")
    )
)]
pub async fn delete_product(
    State(state): State<CatalogState>,
    EntityId(id): EntityId,
) -> Result<StatusCode> {
    if !product_store::delete(&state.products, id)? {
        return Err(AppError::NotFound(format!("Product {} not found", id)));
    }
    tracing::info!("Deleted product {}", id);

    Ok(StatusCode::NO_CONTENT)
}
