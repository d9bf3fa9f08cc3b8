use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::group::CommodityGroup;

/// Failure to build the catalog from its reference source.
///
/// Fatal at startup: no partial catalog is ever accepted.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The source file is missing or unreadable.
    #[error("failed to read commodity group source: {0}")]
    Io(#[from] std::io::Error),

    /// The source file is not a valid JSON array of {category, name} records.
    #[error("malformed commodity group source: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The fixed reference set of valid commodity groups.
///
/// Loaded once at startup and immutable thereafter. Handed to the intake
/// service by value (dependency injection), never held as global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommodityGroupCatalog {
    groups: HashSet<CommodityGroup>,
    valid_names: HashSet<String>,
}

impl CommodityGroupCatalog {
    /// Load the catalog from a JSON file containing an array of
    /// `{"category": ..., "name": ...}` records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let entries: Vec<CommodityGroup> = serde_json::from_str(&raw)?;

        let catalog = Self::from_groups(entries);
        tracing::info!(
            path = %path.display(),
            groups = catalog.groups.len(),
            "commodity group catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from explicit entries. Useful for tests and for
    /// callers that source the reference data elsewhere.
    ///
    /// Duplicate (category, name) pairs collapse. Duplicate names under
    /// different categories are all kept in the group set; the derived name
    /// index collapses them, so name-based lookup stays well-defined.
    pub fn from_groups(groups: impl IntoIterator<Item = CommodityGroup>) -> Self {
        let groups: HashSet<CommodityGroup> = groups.into_iter().collect();
        let valid_names = groups.iter().map(|g| g.name.clone()).collect();
        Self {
            groups,
            valid_names,
        }
    }

    /// The full catalog. Borrowed view; no defensive copy per call.
    pub fn all(&self) -> &HashSet<CommodityGroup> {
        &self.groups
    }

    /// Exact, case-sensitive match against the loaded group names.
    pub fn is_valid(&self, name: &str) -> bool {
        self.valid_names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
