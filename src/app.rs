use axum::{Router, extract::DefaultBodyLimit};
use chrono::Utc;
use http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    config::{AppConfig, CorsConfig, StockApiConfig},
    error::{AppError, Result},
    routes,
    services::StockClient,
    store::{OrderStore, ProductStore, order_store, product_store},
};

#[derive(Clone, Default)]
pub struct CatalogState {
    pub products: ProductStore,
}

#[derive(Clone)]
pub struct OrderState {
    pub orders: OrderStore,
    pub stock: StockClient,
}

impl OrderState {
    pub fn new(stock: StockClient) -> Self {
        Self {
            orders: OrderStore::new(),
            stock,
        }
    }
}

pub fn build_catalog(config: &AppConfig) -> Result<Router> {
    let state = CatalogState::default();

    if config.seed_data {
        let seeded = product_store::seed(&state.products)?;
        tracing::info!("Seeded {} products", seeded);
    }

    catalog_app(state, config)
}

pub fn catalog_app(state: CatalogState, config: &AppConfig) -> Result<Router> {
    let app = routes::catalog_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors_layer(&config.cors)?)
        .with_state(state);

    Ok(app)
}

pub fn build_orders(config: &AppConfig, stock_api: &StockApiConfig) -> Result<Router> {
    let state = OrderState::new(StockClient::new(stock_api)?);

    if config.seed_data {
        let seeded = order_store::seed(&state.orders, Utc::now())?;
        tracing::info!("Seeded {} orders", seeded);
    }

    order_app(state, config)
}

pub fn order_app(state: OrderState, config: &AppConfig) -> Result<Router> {
    let app = routes::order_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors_layer(&config.cors)?)
        .with_state(state);

    Ok(app)
}

fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let Some(origins) = &cors.allowed_origins else {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    };

    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allowed_origins))
}
