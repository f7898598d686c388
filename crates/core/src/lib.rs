//! `travelhome-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, entity/value-object markers and the error taxonomy shared by the
//! listing crates.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DateRangeError, DomainError, DomainResult, ValidationError};
pub use id::{CategoryId, ItemId, OrderId, UserId};
pub use value_object::ValueObject;
