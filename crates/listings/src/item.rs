use std::collections::BTreeMap;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::debug;

use travelhome_core::{CategoryId, Entity, ItemId, UserId};

use crate::category::Category;
use crate::config::ListingDefaults;
use crate::lookup::ItemLookup;
use crate::scarcity::Scarcity;

/// Bathroom arrangement advertised on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bathroom {
    Private,
    Shared,
}

/// A listed rentable unit.
///
/// An `Item` can hold invalid data (blank title, missing price) so that a
/// submitted form can be represented before it is checked; see
/// [`crate::validation::validate`]. Orders are not held here: the order-item
/// join belongs to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: Option<ItemId>,
    title: String,
    description: String,
    price: Option<i64>,
    bathroom: Option<Bathroom>,
    people_per_unit: NonZeroU32,
    scarcity: Scarcity,
    categories: BTreeMap<CategoryId, Category>,
    user_id: Option<UserId>,
}

impl Item {
    /// New, not-yet-persisted item with [`ListingDefaults::default`].
    ///
    /// `price` is in the smallest currency unit (e.g. cents).
    pub fn new(title: impl Into<String>, description: impl Into<String>, price: i64) -> Self {
        Self::with_defaults(&ListingDefaults::default(), title, description, Some(price))
    }

    pub fn with_defaults(
        defaults: &ListingDefaults,
        title: impl Into<String>,
        description: impl Into<String>,
        price: Option<i64>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            price,
            bathroom: defaults.bathroom,
            people_per_unit: defaults.people_per_unit,
            scarcity: Scarcity::Endangered,
            categories: BTreeMap::new(),
            user_id: None,
        }
    }

    /// Attach the identifier the store assigned.
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_owner(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_bathroom(mut self, bathroom: Bathroom) -> Self {
        self.bathroom = Some(bathroom);
        self
    }

    pub fn with_people_per_unit(mut self, people_per_unit: NonZeroU32) -> Self {
        self.people_per_unit = people_per_unit;
        self
    }

    pub fn id_typed(&self) -> Option<ItemId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price in the smallest currency unit; `None` when not given.
    pub fn price(&self) -> Option<i64> {
        self.price
    }

    pub fn bathroom(&self) -> Option<Bathroom> {
        self.bathroom
    }

    pub fn people_per_unit(&self) -> NonZeroU32 {
        self.people_per_unit
    }

    pub fn scarcity(&self) -> Scarcity {
        self.scarcity
    }

    pub fn is_extinct(&self) -> bool {
        self.scarcity.is_terminal()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_price(&mut self, price: Option<i64>) {
        self.price = price;
    }

    /// Snapshot of the item's categories, ordered by category id.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn has_category(&self, category: &Category) -> bool {
        self.categories.contains_key(&category.id_typed())
    }

    /// File the item under `category`.
    ///
    /// Returns `false` when the item already had it (set unchanged).
    pub fn add_category(&mut self, category: Category) -> bool {
        let category_id = category.id_typed();
        if self.categories.contains_key(&category_id) {
            return false;
        }
        debug!(item_id = ?self.id, %category_id, "category added");
        self.categories.insert(category_id, category);
        true
    }

    /// Remove `category` from the item. Removing a category the item does not
    /// have is a no-op and returns `false`.
    pub fn remove_category(&mut self, category: &Category) -> bool {
        let category_id = category.id_typed();
        let removed = self.categories.remove(&category_id).is_some();
        if removed {
            debug!(item_id = ?self.id, %category_id, "category removed");
        }
        removed
    }

    /// Move the item to `Extinct`.
    ///
    /// Returns `true` on the transition and `false` if the item was already
    /// extinct. Never fails.
    pub fn trigger_extinction(&mut self) -> bool {
        if self.scarcity.is_terminal() {
            return false;
        }
        self.scarcity = Scarcity::Extinct;
        debug!(item_id = ?self.id, title = %self.title, "extinction event triggered");
        true
    }

    pub fn is_valid<L: ItemLookup + ?Sized>(&self, lookup: &L) -> bool {
        crate::validation::validate(self, lookup).is_ok()
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}
