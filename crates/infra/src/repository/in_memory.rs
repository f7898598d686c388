use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{info, warn};

use travelhome_core::{CategoryId, ItemId, OrderId};
use travelhome_listings::{Category, Item, ItemLookup, Order, OrderItem, validate};

use super::r#trait::{ItemRepository, StoreError};

#[derive(Debug, Default)]
struct ItemTable(BTreeMap<ItemId, Item>);

impl ItemLookup for ItemTable {
    fn find_item_by_title(&self, title: &str) -> Option<Item> {
        self.0.values().find(|item| item.title() == title).cloned()
    }
}

#[derive(Debug, Default)]
struct Tables {
    items: ItemTable,
    categories: BTreeMap<CategoryId, Category>,
    orders: BTreeMap<OrderId, Order>,
    order_items: BTreeSet<OrderItem>,
}

/// In-memory record store.
///
/// Intended for tests/dev. A single `RwLock` guards all tables, so validation
/// and insert in `save` see one consistent snapshot.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    tables: RwLock<Tables>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

impl ItemLookup for InMemoryItemRepository {
    fn find_item_by_title(&self, title: &str) -> Option<Item> {
        self.tables.read().ok()?.items.find_item_by_title(title)
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn save(&self, item: Item) -> Result<Item, StoreError> {
        let mut tables = self.write()?;

        if let Err(err) = validate(&item, &tables.items) {
            warn!(title = %item.title(), error = %err, "item rejected");
            return Err(err.into());
        }

        let item_id = item.id_typed().unwrap_or_else(ItemId::new);
        let item = item.with_id(item_id);

        for category in item.categories() {
            tables
                .categories
                .entry(category.id_typed())
                .or_insert(category);
        }
        tables.items.0.insert(item_id, item.clone());

        info!(%item_id, title = %item.title(), scarcity = %item.scarcity(), "item saved");
        Ok(item)
    }

    fn get(&self, id: ItemId) -> Result<Item, StoreError> {
        self.read()?.items.0.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn list(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.read()?.items.0.values().cloned().collect())
    }

    fn delete(&self, id: ItemId) -> Result<Item, StoreError> {
        let mut tables = self.write()?;
        let item = tables.items.0.remove(&id).ok_or(StoreError::NotFound)?;
        tables.order_items.retain(|row| row.item_id != id);
        info!(item_id = %id, "item deleted");
        Ok(item)
    }

    fn save_category(&self, category: Category) -> Result<Category, StoreError> {
        let mut tables = self.write()?;
        tables
            .categories
            .insert(category.id_typed(), category.clone());
        Ok(category)
    }

    fn load_categories(&self, item_id: ItemId) -> Result<Vec<Category>, StoreError> {
        let tables = self.read()?;
        let item = tables.items.0.get(&item_id).ok_or(StoreError::NotFound)?;

        Ok(item
            .categories()
            .into_iter()
            .map(|category| {
                tables
                    .categories
                    .get(&category.id_typed())
                    .cloned()
                    .unwrap_or(category)
            })
            .collect())
    }

    fn save_order(&self, order: Order) -> Result<Order, StoreError> {
        let mut tables = self.write()?;
        tables.orders.insert(order.id_typed(), order.clone());
        Ok(order)
    }

    fn attach_to_order(&self, order_id: OrderId, item_id: ItemId) -> Result<bool, StoreError> {
        let mut tables = self.write()?;
        if !tables.orders.contains_key(&order_id) || !tables.items.0.contains_key(&item_id) {
            return Err(StoreError::NotFound);
        }
        Ok(tables.order_items.insert(OrderItem { order_id, item_id }))
    }

    fn orders_for_item(&self, item_id: ItemId) -> Result<Vec<Order>, StoreError> {
        let tables = self.read()?;
        if !tables.items.0.contains_key(&item_id) {
            return Err(StoreError::NotFound);
        }

        Ok(tables
            .order_items
            .iter()
            .filter(|row| row.item_id == item_id)
            .filter_map(|row| tables.orders.get(&row.order_id).cloned())
            .collect())
    }

    fn items_for_order(&self, order_id: OrderId) -> Result<Vec<Item>, StoreError> {
        let tables = self.read()?;
        if !tables.orders.contains_key(&order_id) {
            return Err(StoreError::NotFound);
        }

        Ok(tables
            .order_items
            .iter()
            .filter(|row| row.order_id == order_id)
            .filter_map(|row| tables.items.0.get(&row.item_id).cloned())
            .collect())
    }
}
