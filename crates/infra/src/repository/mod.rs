//! Record store boundary for listings.
//!
//! Defines the persistence-facing contract the listing core consumes (lookups,
//! validated saves, category and order joins) without making storage
//! assumptions, plus an in-memory implementation for tests and development.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryItemRepository;
pub use r#trait::{ItemRepository, StoreError};
