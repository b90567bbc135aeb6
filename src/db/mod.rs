//! Persistence layer for the statistics blob.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only
mod store;

pub use error::StoreError;
pub use models::{KvEntry, NewKvEntry};
pub use repository::SqliteStore;
pub use store::{KeyValueStore, MemoryStore};
