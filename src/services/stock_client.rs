use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    config::StockApiConfig,
    error::{AppError, Result},
};

/// Why an order could not pass the stock check.
///
/// `Transport` covers anything that went wrong talking to the stock service or
/// decoding its answer. The other two are business outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockCheckError {
    ProductNotFound,
    InsufficientStock,
    Transport(String),
}

impl fmt::Display for StockCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockCheckError::ProductNotFound => write!(f, "Product not found in stock"),
            StockCheckError::InsufficientStock => write!(f, "Insufficient stock quantity"),
            StockCheckError::Transport(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StockCheckError {}

/// Product as reported by the stock service. Missing fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StockProduct {
    pub id: i32,
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub quantity: i32,
}

/// Decodes a stock service product body, matching field names case-insensitively.
/// A JSON `null` body yields `None`.
pub fn parse_stock_product(body: &str) -> std::result::Result<Option<StockProduct>, StockCheckError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| StockCheckError::Transport(format!("Invalid product payload: {}", e)))?;

    let fields = match value {
        Value::Null => return Ok(None),
        Value::Object(fields) => fields,
        other => {
            return Err(StockCheckError::Transport(format!(
                "Unexpected product payload: {}",
                other
            )));
        }
    };

    let normalized: Map<String, Value> = fields
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect();

    serde_json::from_value(Value::Object(normalized))
        .map(Some)
        .map_err(|e| StockCheckError::Transport(format!("Invalid product payload: {}", e)))
}

#[derive(Debug, Clone)]
pub struct StockClient {
    http: reqwest::Client,
    base_url: String,
}

impl StockClient {
    pub fn new(config: &StockApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build stock client: {}", e)))?;

        tracing::info!("Stock client targeting {}", config.base_url);

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn product_url(&self, product_id: i32) -> String {
        format!("{}/products/{}", self.base_url, product_id)
    }

    /// `GET /products/{id}` on the stock service. Any non-success status means
    /// the product is treated as absent.
    pub async fn fetch_product(
        &self,
        product_id: i32,
    ) -> std::result::Result<Option<StockProduct>, StockCheckError> {
        let url = self.product_url(product_id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| StockCheckError::Transport(format!("Stock API request failed: {}", e)))?;

        if !response.status().is_success() {
            tracing::debug!("Stock API answered {} for {}", response.status(), url);
            return Err(StockCheckError::ProductNotFound);
        }

        let body = response.text().await.map_err(|e| {
            StockCheckError::Transport(format!("Failed to read stock response: {}", e))
        })?;

        parse_stock_product(&body)
    }

    /// Point-in-time check that `quantity` units of the product are in stock.
    /// Nothing is reserved on the stock side.
    pub async fn check_availability(
        &self,
        product_id: i32,
        quantity: i32,
    ) -> std::result::Result<StockProduct, StockCheckError> {
        let product = self
            .fetch_product(product_id)
            .await?
            .ok_or(StockCheckError::InsufficientStock)?;

        if product.quantity < quantity {
            return Err(StockCheckError::InsufficientStock);
        }

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn parses_field_names_case_insensitively() {
        let product =
            parse_stock_product(r#"{"Id":1,"NAME":"Laptop","Price":1200.0,"quantity":15}"#)
                .unwrap()
                .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.name.as_deref(), Some("Laptop"));
        assert_eq!(product.price, dec!(1200));
        assert_eq!(product.quantity, 15);
    }

    #[test]
    fn null_body_is_no_product() {
        assert_eq!(parse_stock_product("null").unwrap(), None);
    }

    #[test]
    fn null_name_is_tolerated() {
        let product = parse_stock_product(r#"{"id":4,"name":null,"price":350.00,"quantity":20}"#)
            .unwrap()
            .unwrap();
        assert_eq!(product.name, None);
        assert_eq!(product.quantity, 20);
    }

    #[test]
    fn missing_quantity_defaults_to_zero() {
        let product = parse_stock_product(r#"{"id":3}"#).unwrap().unwrap();
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn garbage_body_is_a_transport_error() {
        let err = parse_stock_product("<html>oops</html>").unwrap_err();
        assert!(matches!(err, StockCheckError::Transport(_)));

        let err = parse_stock_product("[1,2,3]").unwrap_err();
        assert!(matches!(err, StockCheckError::Transport(_)));
    }

    #[test]
    fn business_errors_carry_wire_messages() {
        assert_eq!(
            StockCheckError::ProductNotFound.to_string(),
            "Product not found in stock"
        );
        assert_eq!(
            StockCheckError::InsufficientStock.to_string(),
            "Insufficient stock quantity"
        );
    }

    #[test]
    fn product_url_joins_base_and_id() {
        let client = StockClient::new(&StockApiConfig {
            base_url: "http://stock:8081".to_string(),
            timeout: None,
        })
        .unwrap();
        assert_eq!(client.product_url(9), "http://stock:8081/products/9");
    }
}
