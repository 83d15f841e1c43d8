pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;
pub mod store;
pub mod utils;

pub use app::{CatalogState, OrderState};
pub use config::{AppConfig, StockApiConfig};
pub use error::{AppError, Result};
