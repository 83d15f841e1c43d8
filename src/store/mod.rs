mod memory;

pub mod order_store;
pub mod product_store;

pub use memory::MemoryStore;
pub use order_store::OrderStore;
pub use product_store::ProductStore;
