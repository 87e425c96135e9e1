//! Pending-order queue: an indexed binary max-heap.
//!
//! Entries live in a `Vec` laid out as a binary heap ordered by
//! [`Order::service_cmp`]. A side map from order id to heap slot is updated on
//! every move, which is what makes removal by id O(log n) instead of a scan.

use std::collections::HashMap;

use wareflow_core::{DomainError, DomainResult, Entity, OrderId};

use crate::error::{FulfillmentError, FulfillmentResult};
use crate::order::Order;

#[derive(Debug, Clone, Default)]
pub struct PriorityOrderQueue {
    heap: Vec<Order>,
    slots: HashMap<OrderId, usize>,
}

impl PriorityOrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pending order. Ids must be unique within the queue.
    pub fn admit(&mut self, order: Order) -> DomainResult<()> {
        let id = order.id();
        if self.slots.contains_key(&id) {
            return Err(DomainError::duplicate("pending order", &order));
        }

        let slot = self.heap.len();
        self.slots.insert(id, slot);
        self.heap.push(order);
        self.sift_up(slot);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn peek_max(&self) -> Option<&Order> {
        self.heap.first()
    }

    /// Remove the order served next. The queue is untouched when empty.
    pub fn pop_max(&mut self) -> FulfillmentResult<Order> {
        if self.heap.is_empty() {
            return Err(FulfillmentError::EmptyQueue);
        }
        Ok(self.remove_at(0))
    }

    /// Remove a specific order wherever it sits in the heap.
    pub fn remove_by_id(&mut self, id: OrderId) -> Option<Order> {
        let slot = *self.slots.get(&id)?;
        Some(self.remove_at(slot))
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, id: OrderId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Pending orders in service order, without touching the heap.
    pub fn snapshot_descending(&self) -> Vec<Order> {
        let mut orders = self.heap.clone();
        orders.sort_by(Order::service_cmp);
        orders
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn remove_at(&mut self, slot: usize) -> Order {
        let removed = self.heap.swap_remove(slot);
        self.slots.remove(&removed.id);

        if slot < self.heap.len() {
            // The former last entry now sits in `slot`; it may need to move
            // either way relative to its new neighbours.
            self.slots.insert(self.heap[slot].id, slot);
            let settled = self.sift_up(slot);
            self.sift_down(settled);
        }

        removed
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].id, a);
        self.slots.insert(self.heap[b].id, b);
    }

    /// Returns the slot the entry ended up in.
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.heap[slot].served_before(&self.heap[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut best = slot;

            if left < len && self.heap[left].served_before(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].served_before(&self.heap[best]) {
                best = right;
            }
            if best == slot {
                break;
            }

            self.swap(slot, best);
            slot = best;
        }
    }

    #[cfg(test)]
    fn invariants_hold(&self) -> bool {
        let ordered = (1..self.heap.len())
            .all(|i| !self.heap[i].served_before(&self.heap[(i - 1) / 2]));
        let indexed = self.slots.len() == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(i, o)| self.slots.get(&o.id) == Some(&i));
        ordered && indexed
    }
}
