//! Inventory and add-on domain types shared by the quoting and matching
//! engines.

pub mod domain;

pub use domain::{AddOn, CatalogItem, HullType};
