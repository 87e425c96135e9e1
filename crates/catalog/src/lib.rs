//! Product catalog module.
//!
//! Sorted product lookup backed by an index-addressed binary search tree
//! (no IO, no storage).

pub mod product;

pub use product::{Product, ProductCatalog};
