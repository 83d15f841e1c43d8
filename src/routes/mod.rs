mod health;
mod orders;
mod products;

use axum::{Json, Router, routing::get};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    CatalogState, OrderState,
    error::ErrorBody,
    models::{Order, OrderRequest, OrderUpdateRequest, Product, ProductRequest},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Stock API", description = "Product catalog"),
    paths(
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
    ),
    components(schemas(Product, ProductRequest, ErrorBody)),
    tags((name = "products", description = "Catalog CRUD"))
)]
pub struct CatalogApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Order API", description = "Orders validated against the stock service"),
    paths(
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::delete_order,
    ),
    components(schemas(Order, OrderRequest, OrderUpdateRequest, ErrorBody)),
    tags((name = "orders", description = "Order CRUD"))
)]
pub struct OrderApi;

async fn catalog_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(CatalogApi::openapi())
}

async fn order_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(OrderApi::openapi())
}

pub fn catalog_router() -> Router<CatalogState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::catalog_readiness))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/openapi.json", get(catalog_openapi))
        .merge(Scalar::with_url("/scalar", CatalogApi::openapi()))
}

pub fn order_router() -> Router<OrderState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::order_readiness))
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route(
            "/orders/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
        .route("/openapi.json", get(order_openapi))
        .merge(Scalar::with_url("/scalar", OrderApi::openapi()))
}
