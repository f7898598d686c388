use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use travelhome_core::{CategoryId, Entity};

/// A labeled tag an item can be filed under (many-to-many with items).
///
/// Equality and hashing go by `id` only: renaming a category does not make it a
/// different category, and two categories that share a name are still distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(CategoryId::new(), name)
    }

    pub fn with_id(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> Option<&Self::Id> {
        Some(&self.id)
    }
}
