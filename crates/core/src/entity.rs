//! Records with a stable key.

/// Anything stored and looked up by a typed id (stock items, products, orders).
pub trait Entity {
    type Id: Copy + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> Self::Id;
}
