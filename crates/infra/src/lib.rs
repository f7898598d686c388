//! Infrastructure layer: record stores backing the listing core.

pub mod repository;

pub use repository::{InMemoryItemRepository, ItemRepository, StoreError};
