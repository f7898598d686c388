use std::sync::Arc;

use thiserror::Error;

use travelhome_core::{ItemId, OrderId, ValidationError};
use travelhome_listings::{Category, Item, ItemLookup, Order};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The record was rejected by item validation; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound,

    /// The store cannot serve requests (e.g. a writer panicked mid-update).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Record store for items, categories and the order-item join.
///
/// Relationship reads (`load_categories`, `orders_for_item`, `items_for_order`)
/// return owned snapshots; mutating them does not touch the store.
///
/// ## Uniqueness
///
/// `save` must validate the item against the store's own contents and persist
/// it atomically with respect to other saves, so two concurrent saves with the
/// same title cannot both succeed.
pub trait ItemRepository: ItemLookup + Send + Sync {
    /// Validate and persist `item`. Assigns an id on first save.
    fn save(&self, item: Item) -> Result<Item, StoreError>;

    fn get(&self, id: ItemId) -> Result<Item, StoreError>;

    /// All items, ordered by id.
    fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Remove an item and its order-item join rows.
    fn delete(&self, id: ItemId) -> Result<Item, StoreError>;

    fn save_category(&self, category: Category) -> Result<Category, StoreError>;

    /// Categories of an item, resolved against the category table so renames
    /// are visible.
    fn load_categories(&self, item_id: ItemId) -> Result<Vec<Category>, StoreError>;

    fn save_order(&self, order: Order) -> Result<Order, StoreError>;

    /// Place an item on an order. Returns `false` if it was already there.
    fn attach_to_order(&self, order_id: OrderId, item_id: ItemId) -> Result<bool, StoreError>;

    fn orders_for_item(&self, item_id: ItemId) -> Result<Vec<Order>, StoreError>;

    fn items_for_order(&self, order_id: OrderId) -> Result<Vec<Item>, StoreError>;
}

impl<S> ItemRepository for Arc<S>
where
    S: ItemRepository + ?Sized,
{
    fn save(&self, item: Item) -> Result<Item, StoreError> {
        (**self).save(item)
    }

    fn get(&self, id: ItemId) -> Result<Item, StoreError> {
        (**self).get(id)
    }

    fn list(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list()
    }

    fn delete(&self, id: ItemId) -> Result<Item, StoreError> {
        (**self).delete(id)
    }

    fn save_category(&self, category: Category) -> Result<Category, StoreError> {
        (**self).save_category(category)
    }

    fn load_categories(&self, item_id: ItemId) -> Result<Vec<Category>, StoreError> {
        (**self).load_categories(item_id)
    }

    fn save_order(&self, order: Order) -> Result<Order, StoreError> {
        (**self).save_order(order)
    }

    fn attach_to_order(&self, order_id: OrderId, item_id: ItemId) -> Result<bool, StoreError> {
        (**self).attach_to_order(order_id, item_id)
    }

    fn orders_for_item(&self, item_id: ItemId) -> Result<Vec<Order>, StoreError> {
        (**self).orders_for_item(item_id)
    }

    fn items_for_order(&self, order_id: OrderId) -> Result<Vec<Item>, StoreError> {
        (**self).items_for_order(order_id)
    }
}
