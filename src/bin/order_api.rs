#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

use stock_orders::{
    app,
    config::{AppConfig, StockApiConfig},
    server,
};

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    server::init_tracing();

    let (config, stock_api) = match AppConfig::from_env(DEFAULT_PORT)
        .and_then(|cfg| Ok((cfg, StockApiConfig::from_env()?)))
    {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app = match app::build_orders(&config, &stock_api) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to build order service: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(app, &config.server_address()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
