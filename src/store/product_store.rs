use rust_decimal::{Decimal, dec};

use crate::{
    error::Result,
    models::{Product, ProductRequest},
    store::MemoryStore,
};

pub type ProductStore = MemoryStore<Product>;

pub fn find_all(store: &ProductStore) -> Result<Vec<Product>> {
    store.all()
}

pub fn find_by_id(store: &ProductStore, id: i32) -> Result<Option<Product>> {
    store.get(id)
}

pub fn create(store: &ProductStore, req: ProductRequest) -> Result<Product> {
    store.insert_with(|id| req.into_product(id))
}

/// Full replacement of name, price and quantity.
pub fn update(store: &ProductStore, id: i32, req: ProductRequest) -> Result<Option<Product>> {
    store.update_with(id, |product| {
        product.name = req.name;
        product.price = req.price;
        product.quantity = req.quantity;
    })
}

pub fn delete(store: &ProductStore, id: i32) -> Result<bool> {
    Ok(store.remove(id)?.is_some())
}

const SEED_PRODUCTS: [(&str, Decimal, i32); 5] = [
    ("Laptop", dec!(1200.00), 15),
    ("Mouse", dec!(25.50), 50),
    ("Keyboard", dec!(75.00), 30),
    ("Monitor", dec!(350.00), 20),
    ("Headphones", dec!(85.00), 40),
];

/// Inserts the demo catalog into an empty store. Returns how many rows were added.
pub fn seed(store: &ProductStore) -> Result<usize> {
    if !store.is_empty()? {
        return Ok(0);
    }

    for (name, price, quantity) in SEED_PRODUCTS {
        create(
            store,
            ProductRequest {
                name: name.to_string(),
                price,
                quantity,
            },
        )?;
    }

    Ok(SEED_PRODUCTS.len())
}
