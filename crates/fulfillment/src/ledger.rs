//! Undo ledger.

use serde::{Deserialize, Serialize};

use wareflow_core::{ItemId, OrderId};

use crate::error::{FulfillmentError, FulfillmentResult};

/// A committed mutation and exactly what is needed to invert it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionRecord {
    /// An order was admitted and `quantity` units of `item_id` reserved.
    Admitted {
        order_id: OrderId,
        item_id: ItemId,
        quantity: u32,
        priority: i32,
    },
    /// An order was routed and moved to the dispatch stage.
    Processed { order_id: OrderId },
    /// An order shipped. Never inverted.
    Dispatched { order_id: OrderId },
}

impl ActionRecord {
    pub fn order_id(&self) -> OrderId {
        match self {
            ActionRecord::Admitted { order_id, .. }
            | ActionRecord::Processed { order_id }
            | ActionRecord::Dispatched { order_id } => *order_id,
        }
    }

    /// Stable name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ActionRecord::Admitted { .. } => "admitted",
            ActionRecord::Processed { .. } => "processed",
            ActionRecord::Dispatched { .. } => "dispatched",
        }
    }
}

/// Last-in-first-out log of reversible actions. Only the top is reachable.
#[derive(Debug, Clone, Default)]
pub struct ActionLedger {
    entries: Vec<ActionRecord>,
}

impl ActionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: ActionRecord) {
        self.entries.push(action);
    }

    pub fn has_pending(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn pop_last(&mut self) -> FulfillmentResult<ActionRecord> {
        self.entries.pop().ok_or(FulfillmentError::NothingToUndo)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
