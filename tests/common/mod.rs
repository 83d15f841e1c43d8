#![allow(dead_code)]

use axum::Router;
use stock_orders::{
    app,
    config::{AppConfig, StockApiConfig},
};

pub fn config(seed: bool) -> AppConfig {
    AppConfig::from_lookup(0, move |key| match key {
        "HOST" => Some("127.0.0.1".to_string()),
        "SEED_DATA" => Some(seed.to_string()),
        _ => None,
    })
    .unwrap()
}

/// Bind to port 0 and return the base URL of the running server.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn start_catalog(seed: bool) -> String {
    spawn(app::build_catalog(&config(seed)).unwrap()).await
}

pub async fn start_orders(seed: bool, stock_url: &str) -> String {
    let stock_api = StockApiConfig::from_lookup(|key| match key {
        "STOCK_API_URL" => Some(stock_url.to_string()),
        "STOCK_API_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .unwrap();
    spawn(app::build_orders(&config(seed), &stock_api).unwrap()).await
}

/// A URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
