//! `procurehub-catalog` — the commodity-group reference catalog.
//!
//! Loaded once at startup, immutable for the process lifetime. Answers
//! "is this commodity-group name valid?" for the intake service.

pub mod catalog;
pub mod group;

pub use catalog::{CatalogLoadError, CommodityGroupCatalog};
pub use group::CommodityGroup;
