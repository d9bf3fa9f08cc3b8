use serde::{Deserialize, Serialize};

use procurehub_core::ValueObject;

/// A commodity group: a (category, name) classification tag describing what
/// is being procured.
///
/// Equality and hashing cover both fields, so duplicate entries collapse
/// when collected into a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommodityGroup {
    pub category: String,
    pub name: String,
}

impl CommodityGroup {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }
}

impl ValueObject for CommodityGroup {}

impl core::fmt::Display for CommodityGroup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} / {}", self.category, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_covers_category_and_name() {
        let a = CommodityGroup::new("Information Technology", "Software");
        let b = CommodityGroup::new("Information Technology", "Software");
        let c = CommodityGroup::new("General Services", "Software");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn duplicate_pairs_collapse_in_a_set() {
        let groups: HashSet<CommodityGroup> = [
            CommodityGroup::new("Information Technology", "Software"),
            CommodityGroup::new("Information Technology", "Software"),
            CommodityGroup::new("Information Technology", "Hardware"),
        ]
        .into_iter()
        .collect();

        assert_eq!(groups.len(), 2);
    }
}
