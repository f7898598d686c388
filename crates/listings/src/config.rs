use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::item::Bathroom;

/// Defaults applied to newly listed items when the lister leaves a field out.
///
/// Deserializable so the hosting service can load it from its own configuration
/// source; every field is optional there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingDefaults {
    pub people_per_unit: NonZeroU32,
    pub bathroom: Option<Bathroom>,
}

impl Default for ListingDefaults {
    fn default() -> Self {
        Self {
            people_per_unit: NonZeroU32::MIN,
            bathroom: None,
        }
    }
}
