//! Order-lifecycle orchestration.
//!
//! The coordinator exclusively owns the pending queue, the dispatch stage, the
//! undo ledger and the warehouse graph. Inventory is not owned: callers pass a
//! `StockLedger` into the operations that touch stock.
//!
//! ## Ledger discipline
//!
//! Every successful admission records `Admitted`, and every successful process
//! records `Processed` inside the same call, so `undo_last` right after either
//! always has an entry to invert. Failed attempts and dispatches record
//! nothing.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use wareflow_core::{ItemId, NodeId, OrderId};
use wareflow_inventory::StockLedger;
use wareflow_routing::{Route, RouteError, WarehouseGraph};

use crate::dispatch::DispatchQueue;
use crate::error::{FulfillmentError, FulfillmentResult};
use crate::ledger::{ActionLedger, ActionRecord};
use crate::order::Order;
use crate::priority_queue::PriorityOrderQueue;

/// Origin of every route.
pub const DEPOT_NODE: NodeId = NodeId::new(0);

/// Result of a successful process: the order now waiting for dispatch and the
/// route that reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedOrder {
    pub order: Order,
    pub route: Route,
}

/// What an undo reverted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reverted", rename_all = "snake_case")]
pub enum UndoOutcome {
    /// The order left the pending queue and its stock was returned.
    Admission {
        order_id: OrderId,
        item_id: ItemId,
        quantity: u32,
    },
    /// The order moved from the dispatch stage back to the pending queue.
    Process { order_id: OrderId },
}

#[derive(Debug, Clone)]
pub struct OrderLifecycleCoordinator {
    graph: WarehouseGraph,
    pending: PriorityOrderQueue,
    ready: DispatchQueue,
    ledger: ActionLedger,
    next_order_id: OrderId,
}

impl OrderLifecycleCoordinator {
    pub fn new(graph: WarehouseGraph) -> Self {
        Self {
            graph,
            pending: PriorityOrderQueue::new(),
            ready: DispatchQueue::new(),
            ledger: ActionLedger::new(),
            next_order_id: OrderId::FIRST,
        }
    }

    /// Admit an order for `quantity` units of `item`, reserving the stock.
    ///
    /// Nothing changes on failure.
    #[instrument(level = "debug", skip(self, stock))]
    pub fn admit_order<S>(
        &mut self,
        stock: &mut S,
        item: ItemId,
        quantity: u32,
        priority: i32,
    ) -> FulfillmentResult<OrderId>
    where
        S: StockLedger + ?Sized,
    {
        if quantity == 0 || !stock.has_stock(item, quantity) {
            tracing::warn!(item = %item, quantity, "admission rejected");
            return Err(FulfillmentError::InvalidItemOrStock);
        }
        let Some(info) = stock.item_info(item) else {
            return Err(FulfillmentError::InvalidItemOrStock);
        };

        let order_id = self.next_order_id;
        self.pending.admit(Order {
            id: order_id,
            priority,
            item_id: item,
            item_name: info.name,
            quantity,
            location: info.location,
        })?;

        if !stock.adjust_stock(item, -i64::from(quantity)) {
            self.pending.remove_by_id(order_id);
            return Err(FulfillmentError::InvalidItemOrStock);
        }

        self.next_order_id = order_id.next();
        self.ledger.record(ActionRecord::Admitted {
            order_id,
            item_id: item,
            quantity,
            priority,
        });

        tracing::info!(order_id = %order_id, item = %item, quantity, priority, "order admitted");
        Ok(order_id)
    }

    /// Route the highest-priority pending order and move it to dispatch.
    ///
    /// An unreachable location puts the order straight back into the pending
    /// queue and records nothing.
    pub fn process_next(&mut self) -> FulfillmentResult<ProcessedOrder> {
        let order = self.pending.pop_max()?;

        match self.graph.shortest_path(DEPOT_NODE, order.location) {
            Ok(route) => {
                let order_id = order.id;
                self.ready.enqueue(order.clone());
                self.ledger.record(ActionRecord::Processed { order_id });

                tracing::info!(
                    order_id = %order_id,
                    priority = order.priority,
                    cost = route.cost,
                    "order processed"
                );
                Ok(ProcessedOrder { order, route })
            }
            Err(RouteError::Unreachable { to, .. }) => {
                let order_id = order.id;
                self.pending.admit(order)?;

                tracing::warn!(order_id = %order_id, location = %to, "order location unreachable");
                Err(FulfillmentError::UnreachableLocation {
                    order_id,
                    location: to,
                })
            }
        }
    }

    /// Ship the oldest ready order. Terminal: not recorded, not reversible.
    pub fn dispatch_next(&mut self) -> FulfillmentResult<Order> {
        let order = self
            .ready
            .dispatch_front()
            .ok_or(FulfillmentError::EmptyQueue)?;

        tracing::info!(order_id = %order.id, "order dispatched");
        Ok(order)
    }

    /// Invert the most recent recorded action.
    ///
    /// The ledger entry is consumed even when inverting it fails, since such
    /// an entry refers to a state that no longer exists.
    #[instrument(level = "debug", skip(self, stock))]
    pub fn undo_last<S>(&mut self, stock: &mut S) -> FulfillmentResult<UndoOutcome>
    where
        S: StockLedger + ?Sized,
    {
        let record = self.ledger.pop_last()?;
        tracing::debug!(kind = record.kind(), order_id = %record.order_id(), "undoing");

        match record {
            ActionRecord::Admitted {
                order_id,
                item_id,
                quantity,
                ..
            } => {
                let Some(order) = self.pending.remove_by_id(order_id) else {
                    tracing::error!(order_id = %order_id, "ledger names an order that is not pending");
                    return Err(FulfillmentError::OrderNotPending(order_id));
                };
                if !stock.adjust_stock(item_id, i64::from(quantity)) {
                    // Keep the order pending so its reservation is still accounted for.
                    self.pending.admit(order)?;
                    tracing::error!(item = %item_id, quantity, "reserved stock could not be returned");
                    return Err(FulfillmentError::StockNotRestored { order_id, item_id });
                }

                tracing::info!(order_id = %order_id, "admission undone");
                Ok(UndoOutcome::Admission {
                    order_id,
                    item_id,
                    quantity,
                })
            }
            ActionRecord::Processed { order_id } => {
                let order = self
                    .ready
                    .withdraw_most_recent()
                    .ok_or(FulfillmentError::DispatchQueueEmpty)?;
                if order.id != order_id {
                    tracing::error!(
                        expected = %order_id,
                        found = %order.id,
                        "dispatch tail does not match ledger"
                    );
                }
                let reverted = order.id;
                self.pending.admit(order)?;

                tracing::info!(order_id = %reverted, "process undone");
                Ok(UndoOutcome::Process { order_id: reverted })
            }
            ActionRecord::Dispatched { .. } => Err(FulfillmentError::UnsupportedUndo),
        }
    }

    /// Pending orders in service order.
    pub fn list_pending(&self) -> Vec<Order> {
        self.pending.snapshot_descending()
    }

    /// Ready orders, oldest first.
    pub fn list_ready(&self) -> Vec<Order> {
        self.ready.snapshot()
    }

    pub fn graph(&self) -> &WarehouseGraph {
        &self.graph
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    pub fn ledger_len(&self) -> usize {
        self.ledger.len()
    }

    pub fn can_undo(&self) -> bool {
        self.ledger.has_pending()
    }
}
