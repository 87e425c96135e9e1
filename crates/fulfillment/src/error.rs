//! Order-lifecycle error model.

use thiserror::Error;

use wareflow_core::{DomainError, ItemId, NodeId, OrderId};

pub type FulfillmentResult<T> = Result<T, FulfillmentError>;

/// Recoverable outcomes reported to the caller.
///
/// None of these abort the coordinator. Unless stated otherwise the state is
/// exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FulfillmentError {
    /// Unknown item, zero quantity or not enough stock.
    #[error("invalid item or insufficient stock")]
    InvalidItemOrStock,

    #[error("queue is empty")]
    EmptyQueue,

    /// The popped order was put back into the pending queue.
    #[error("order {order_id} is stored at unreachable node {location}")]
    UnreachableLocation { order_id: OrderId, location: NodeId },

    #[error("nothing to undo")]
    NothingToUndo,

    /// Undo of a process found no ready order to pull back.
    #[error("dispatch queue is empty; processed order already shipped")]
    DispatchQueueEmpty,

    /// Undo of an admission found the order outside the pending queue
    /// (ledger and queues disagree).
    #[error("order {0} is no longer pending")]
    OrderNotPending(OrderId),

    /// The stock keeper refused to take back reserved units. The order stays
    /// pending.
    #[error("stock for order {order_id} (item {item_id}) could not be returned")]
    StockNotRestored { order_id: OrderId, item_id: ItemId },

    /// Shipped orders cannot be recovered.
    #[error("dispatch cannot be undone")]
    UnsupportedUndo,

    #[error(transparent)]
    Domain(#[from] DomainError),
}
