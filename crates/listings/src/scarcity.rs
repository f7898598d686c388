use serde::{Deserialize, Serialize};

/// Scarcity lifecycle of a listing.
///
/// One edge only: `Endangered -> Extinct`. There is no way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scarcity {
    #[default]
    Endangered,
    Extinct,
}

impl Scarcity {
    /// Stored/wire form (`"endangered"` / `"extinct"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Scarcity::Endangered => "endangered",
            Scarcity::Extinct => "extinct",
        }
    }

    /// Capitalized form shown on the admin item page.
    pub fn label(self) -> &'static str {
        match self {
            Scarcity::Endangered => "Endangered",
            Scarcity::Extinct => "Extinct",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Scarcity::Extinct
    }
}

impl core::fmt::Display for Scarcity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
