use chrono::{DateTime, Duration, Utc};

use crate::{
    error::Result,
    models::{Order, OrderUpdateRequest, STATUS_PENDING},
    store::MemoryStore,
};

pub type OrderStore = MemoryStore<Order>;

pub fn find_all(store: &OrderStore) -> Result<Vec<Order>> {
    store.all()
}

pub fn find_by_id(store: &OrderStore, id: i32) -> Result<Option<Order>> {
    store.get(id)
}

/// Stores a new order in the `Pending` state stamped with `created_at`.
pub fn create_pending(
    store: &OrderStore,
    product_id: i32,
    quantity: i32,
    created_at: DateTime<Utc>,
) -> Result<Order> {
    insert(store, product_id, quantity, STATUS_PENDING, created_at)
}

fn insert(
    store: &OrderStore,
    product_id: i32,
    quantity: i32,
    status: &str,
    created_at: DateTime<Utc>,
) -> Result<Order> {
    store.insert_with(|id| Order {
        id,
        product_id,
        quantity,
        status: status.to_string(),
        created_at,
    })
}

/// Replaces quantity and status. Product reference and creation time never change.
pub fn update(store: &OrderStore, id: i32, req: OrderUpdateRequest) -> Result<Option<Order>> {
    store.update_with(id, |order| {
        order.quantity = req.quantity;
        order.status = req.status;
    })
}

pub fn delete(store: &OrderStore, id: i32) -> Result<bool> {
    Ok(store.remove(id)?.is_some())
}

// (product id, quantity, status, age in days)
const SEED_ORDERS: [(i32, i32, &str, i64); 3] = [
    (1, 2, "Completed", 5),
    (2, 5, "Pending", 2),
    (3, 1, "Completed", 1),
];

pub fn seed(store: &OrderStore, now: DateTime<Utc>) -> Result<usize> {
    if !store.is_empty()? {
        return Ok(0);
    }

    for (product_id, quantity, status, age_days) in SEED_ORDERS {
        insert(store, product_id, quantity, status, now - Duration::days(age_days))?;
    }

    Ok(SEED_ORDERS.len())
}
