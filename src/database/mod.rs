mod connection;
mod memory_store;
mod pg_store;
mod store;

pub use connection::{check_health, create_pool};
pub use memory_store::MemoryStore;
pub use pg_store::PgStore;
pub use store::StorefrontStore;
