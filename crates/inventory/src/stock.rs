use std::collections::HashMap;

use wareflow_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::{InventoryItem, ItemInfo};

/// Capability the order lifecycle needs from the stock keeper.
///
/// `delta` is signed: negative reserves stock, positive returns it.
pub trait StockLedger {
    /// True when the item exists and holds at least `quantity` units.
    fn has_stock(&self, item: ItemId, quantity: u32) -> bool;

    /// Apply a signed adjustment. Returns `false` if the item is unknown or the
    /// adjustment would leave the stock negative; nothing changes in that case.
    fn adjust_stock(&mut self, item: ItemId, delta: i64) -> bool;

    /// Name and location of a known item.
    fn item_info(&self, item: ItemId) -> Option<ItemInfo>;
}

/// In-memory inventory keyed by item id.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: HashMap<ItemId, InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new item.
    pub fn add_item(&mut self, item: InventoryItem) -> DomainResult<()> {
        item.validate()?;
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(DomainError::duplicate("item", &item));
        }
        self.items.insert(id, item);
        Ok(())
    }

    pub fn get(&self, item: ItemId) -> Option<&InventoryItem> {
        self.items.get(&item)
    }

    pub fn quantity(&self, item: ItemId) -> Option<u32> {
        self.items.get(&item).map(|i| i.quantity)
    }

    /// All items, sorted by id for stable rendering.
    pub fn items(&self) -> Vec<InventoryItem> {
        let mut items: Vec<InventoryItem> = self.items.values().cloned().collect();
        items.sort_by_key(|i| i.id);
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl StockLedger for Inventory {
    fn has_stock(&self, item: ItemId, quantity: u32) -> bool {
        self.items
            .get(&item)
            .is_some_and(|i| i.quantity >= quantity)
    }

    fn adjust_stock(&mut self, item: ItemId, delta: i64) -> bool {
        let Some(entry) = self.items.get_mut(&item) else {
            tracing::warn!(item = %item, delta, "stock adjustment for unknown item");
            return false;
        };

        let next = i64::from(entry.quantity)
            .checked_add(delta)
            .and_then(|n| u32::try_from(n).ok());
        let Some(next) = next else {
            tracing::warn!(
                item = %item,
                delta,
                quantity = entry.quantity,
                "stock adjustment out of range"
            );
            return false;
        };

        entry.quantity = next;
        tracing::debug!(item = %item, delta, quantity = next, "stock adjusted");
        true
    }

    fn item_info(&self, item: ItemId) -> Option<ItemInfo> {
        self.items.get(&item).map(InventoryItem::info)
    }
}
