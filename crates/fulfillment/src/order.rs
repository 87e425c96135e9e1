use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use wareflow_core::{Entity, ItemId, NodeId, OrderId};

/// An admitted order.
///
/// Fields are fixed at admission; only queue membership changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Higher is served first.
    pub priority: i32,
    pub item_id: ItemId,
    /// Copied from inventory at admission, never re-looked-up.
    pub item_name: String,
    pub quantity: u32,
    /// Graph node where the item is stored.
    pub location: NodeId,
}

impl Order {
    /// Service order: higher priority first, then lower (earlier) id.
    ///
    /// `Ordering::Less` means `self` is served before `other`.
    pub fn service_cmp(&self, other: &Order) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.id.cmp(&other.id))
    }

    pub(crate) fn served_before(&self, other: &Order) -> bool {
        self.service_cmp(other) == Ordering::Less
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

#[cfg(test)]
pub(crate) fn test_order(id: u64, priority: i32) -> Order {
    Order {
        id: OrderId::new(id),
        priority,
        item_id: ItemId::new(101),
        item_name: "Laptop".to_string(),
        quantity: 1,
        location: NodeId::new(7),
    }
}
