//! Inventory domain module.
//!
//! Stock levels per item plus the narrow `StockLedger` capability that the
//! order lifecycle consumes (no IO, no storage).

pub mod item;
pub mod stock;

pub use item::{InventoryItem, ItemInfo};
pub use stock::{Inventory, StockLedger};
