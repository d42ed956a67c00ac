use std::fmt;

/// An object aboard the station: either carried by the player or lying in a
/// room.
///
/// Identity is the item's name; every player-facing lookup compares names
/// case-insensitively. Two items with the same name are still distinct
/// entries in whatever container holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    description: String,
    mounted: bool,
}

impl Item {
    /// Create a portable item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            mounted: false,
        }
    }

    /// Create an item permanently mounted in its room. Mounted items can be
    /// examined but never taken.
    pub fn mounted(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            mounted: true,
            ..Self::new(name, description)
        }
    }

    /// The item's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's static description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the item is fixed in place.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Case-insensitive name match used for all player-supplied lookups.
    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query.trim())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
