//! Item validation.
//!
//! Validation is a pure check: it never mutates the item, and the only outside
//! knowledge it needs (is this title taken?) comes through [`ItemLookup`].
//! Uniqueness is checked against whatever the lookup sees at call time; making
//! that race-free is the store's job.

use tracing::trace;

use travelhome_core::{Entity, ValidationError};

use crate::item::Item;
use crate::lookup::ItemLookup;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn title_taken<L: ItemLookup + ?Sized>(item: &Item, lookup: &L) -> bool {
    lookup
        .find_item_by_title(item.title())
        .is_some_and(|existing| !existing.same_entity(item))
}

/// Check `item` and return it unchanged when it is valid.
///
/// Checks run in a fixed order (title, description, price, uniqueness) and the
/// first failure is returned.
pub fn validate<'a, L: ItemLookup + ?Sized>(
    item: &'a Item,
    lookup: &L,
) -> Result<&'a Item, ValidationError> {
    if is_blank(item.title()) {
        return Err(ValidationError::MissingTitle);
    }
    if is_blank(item.description()) {
        return Err(ValidationError::MissingDescription);
    }
    match item.price() {
        None => return Err(ValidationError::MissingPrice),
        Some(price) if price <= 0 => return Err(ValidationError::InvalidPrice(price)),
        Some(_) => {}
    }
    if title_taken(item, lookup) {
        return Err(ValidationError::DuplicateTitle(item.title().to_string()));
    }

    trace!(title = %item.title(), "item passed validation");
    Ok(item)
}

/// Every validation failure for `item`, in the same order [`validate`] checks
/// them. Empty when the item is valid.
///
/// Uniqueness is only checked for non-blank titles.
pub fn validation_errors<L: ItemLookup + ?Sized>(item: &Item, lookup: &L) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let title_blank = is_blank(item.title());
    if title_blank {
        errors.push(ValidationError::MissingTitle);
    }
    if is_blank(item.description()) {
        errors.push(ValidationError::MissingDescription);
    }
    match item.price() {
        None => errors.push(ValidationError::MissingPrice),
        Some(price) if price <= 0 => errors.push(ValidationError::InvalidPrice(price)),
        Some(_) => {}
    }
    if !title_blank && title_taken(item, lookup) {
        errors.push(ValidationError::DuplicateTitle(item.title().to_string()));
    }

    errors
}
