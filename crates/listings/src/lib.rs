//! Listings domain module.
//!
//! Business rules for rentable items: validation, category membership, the
//! scarcity lifecycle and availability date ranges. Everything here is
//! deterministic domain logic (no IO, no HTTP, no storage); storage is reached
//! only through the [`ItemLookup`] port.

pub mod availability;
pub mod category;
pub mod config;
pub mod item;
pub mod lookup;
pub mod order;
pub mod scarcity;
pub mod validation;

pub use availability::{DateEntry, mark_booked, parse_available_dates, parse_date};
pub use category::Category;
pub use config::ListingDefaults;
pub use item::{Bathroom, Item};
pub use lookup::ItemLookup;
pub use order::{Order, OrderItem};
pub use scarcity::Scarcity;
pub use validation::{validate, validation_errors};
