//! Ready-for-shipment stage.
//!
//! A two-ended queue with deliberately asymmetric removal: shipping takes the
//! oldest ready order from the front, while undoing a process pulls the order
//! that was just enqueued back off the tail.

use std::collections::VecDeque;

use crate::order::Order;

#[derive(Debug, Clone, Default)]
pub struct DispatchQueue {
    ready: VecDeque<Order>,
}

impl DispatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, order: Order) {
        self.ready.push_back(order);
    }

    /// Ship the oldest ready order. Once returned it is no longer tracked.
    pub fn dispatch_front(&mut self) -> Option<Order> {
        self.ready.pop_front()
    }

    #[cfg(test)]
    pub(crate) fn peek_front(&self) -> Option<&Order> {
        self.ready.front()
    }

    /// The order enqueued last (the one an undo of process must revert).
    pub fn peek_most_recent(&self) -> Option<&Order> {
        self.ready.back()
    }

    /// Pull the most recently enqueued order back out, whatever the length.
    pub fn withdraw_most_recent(&mut self) -> Option<Order> {
        self.ready.pop_back()
    }

    /// Ready orders, oldest first.
    pub fn snapshot(&self) -> Vec<Order> {
        self.ready.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ready.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }
}
