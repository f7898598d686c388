//! Read-side port into the record store.
//!
//! Validation needs to know whether a title is taken, but the listing domain
//! does not own the item collection. Callers inject whatever can answer the
//! question: the real store, or a plain slice of items in tests.

use std::sync::Arc;

use crate::item::Item;

/// Lookup capability used for the title-uniqueness check.
pub trait ItemLookup {
    /// Returns an existing item whose title matches `title` exactly
    /// (case-sensitive), if any.
    fn find_item_by_title(&self, title: &str) -> Option<Item>;
}

impl ItemLookup for [Item] {
    fn find_item_by_title(&self, title: &str) -> Option<Item> {
        self.iter().find(|item| item.title() == title).cloned()
    }
}

impl ItemLookup for Vec<Item> {
    fn find_item_by_title(&self, title: &str) -> Option<Item> {
        self.as_slice().find_item_by_title(title)
    }
}

impl<L> ItemLookup for &L
where
    L: ItemLookup + ?Sized,
{
    fn find_item_by_title(&self, title: &str) -> Option<Item> {
        (**self).find_item_by_title(title)
    }
}

impl<L> ItemLookup for Arc<L>
where
    L: ItemLookup + ?Sized,
{
    fn find_item_by_title(&self, title: &str) -> Option<Item> {
        (**self).find_item_by_title(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_lookup_is_case_sensitive() {
        let items = vec![Item::new("Same Name", "desc", 10)];
        assert!(items.find_item_by_title("Same Name").is_some());
        assert!(items.find_item_by_title("same name").is_none());
    }

    #[test]
    fn empty_collection_finds_nothing() {
        let items: Vec<Item> = Vec::new();
        assert!(items.find_item_by_title("anything").is_none());
    }
}
