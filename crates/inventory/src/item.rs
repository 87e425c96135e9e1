use serde::{Deserialize, Serialize};

use wareflow_core::{DomainError, DomainResult, Entity, ItemId, NodeId};

/// A stocked item and where it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    /// Units currently available (never negative).
    pub quantity: u32,
    /// Graph node holding the item.
    pub location: NodeId,
}

impl InventoryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32, location: NodeId) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            location,
        }
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(())
    }

    pub fn info(&self) -> ItemInfo {
        ItemInfo {
            name: self.name.clone(),
            location: self.location,
        }
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

/// Display label and storage location, as copied onto an order at admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInfo {
    pub name: String,
    pub location: NodeId,
}
