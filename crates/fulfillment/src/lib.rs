//! Order-lifecycle engine.
//!
//! Orders are admitted against inventory into a priority queue, routed from the
//! depot and moved to a dispatch stage, and shipped. Admission and processing
//! are recorded in an undo ledger so the last one can be reversed.
//!
//! ```text
//! admit ─▶ PENDING ──process──▶ READY ──dispatch──▶ SHIPPED
//!            ▲                    │
//!            └──── undo process ──┘
//! ```

pub mod coordinator;
pub mod dispatch;
pub mod error;
pub mod ledger;
pub mod order;
pub mod priority_queue;

pub use coordinator::{DEPOT_NODE, OrderLifecycleCoordinator, ProcessedOrder, UndoOutcome};
pub use dispatch::DispatchQueue;
pub use error::{FulfillmentError, FulfillmentResult};
pub use ledger::{ActionLedger, ActionRecord};
pub use order::Order;
pub use priority_queue::PriorityOrderQueue;
