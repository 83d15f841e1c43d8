use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PRODUCT_NAME_MAX_LEN: usize = 512;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    #[schema(max_length = 512)]
    pub name: String,
    /// Fixed-point price, written as a JSON number with every digit kept.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 1200.00)]
    pub price: Decimal,
    pub quantity: i32,
}

// Request types

/// Body of both `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[schema(max_length = 512)]
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub quantity: i32,
}

impl ProductRequest {
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}
