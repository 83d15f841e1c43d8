#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

use stock_orders::{app, config::AppConfig, server};

const DEFAULT_PORT: u16 = 8081;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    server::init_tracing();

    let config = match AppConfig::from_env(DEFAULT_PORT) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app = match app::build_catalog(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to build stock service: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(app, &config.server_address()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
