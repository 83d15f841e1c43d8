use crate::error::{AppError, Result};
use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub seed_data: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

/// `None` means any origin, method and header is allowed.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

/// Where the order service finds the stock service.
#[derive(Debug, Clone)]
pub struct StockApiConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env(default_port: u16) -> Result<Self> {
        Self::from_lookup(default_port, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(default_port: u16, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: match lookup("PORT") {
                    Some(port) => port
                        .parse()
                        .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                    None => default_port,
                },
                max_body_size: lookup("MAX_BODY_SIZE")
                    .unwrap_or_else(|| "1048576".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty() && s != "*")
                    .map(|s| s.split(',').map(|o| o.trim().to_string()).collect()),
            },
            seed_data: match lookup("SEED_DATA").as_deref() {
                None => true,
                Some("true") | Some("1") => true,
                Some("false") | Some("0") => false,
                Some(other) => {
                    return Err(AppError::ConfigError(format!(
                        "Invalid SEED_DATA value: {}",
                        other
                    )));
                }
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl StockApiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("STOCK_API_URL")
            .unwrap_or_else(|| "http://localhost:8081".to_string())
            .trim_end_matches('/')
            .to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "Invalid STOCK_API_URL: {}",
                base_url
            )));
        }

        let timeout = lookup("STOCK_API_TIMEOUT_SECS")
            .map(|secs| {
                secs.parse::<u64>().map(Duration::from_secs).map_err(|_| {
                    AppError::ConfigError("Invalid STOCK_API_TIMEOUT_SECS value".to_string())
                })
            })
            .transpose()?;

        Ok(Self { base_url, timeout })
    }
}
