use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wareflow_core::NodeId;

/// One direction of an undirected connection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub to: NodeId,
    pub weight: u32,
}

/// Least-cost path between two nodes, start and end included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub cost: u64,
    pub path: Vec<NodeId>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route from node {from} to node {to}")]
    Unreachable { from: NodeId, to: NodeId },
}

/// Warehouse layout as a weighted adjacency list.
///
/// Weights are unsigned, which is what keeps Dijkstra correct here.
#[derive(Debug, Clone, Default)]
pub struct WarehouseGraph {
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl WarehouseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect `a` and `b` in both directions.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: u32) {
        self.adjacency
            .entry(a)
            .or_default()
            .push(Edge { to: b, weight });
        self.adjacency
            .entry(b)
            .or_default()
            .push(Edge { to: a, weight });
    }

    /// Known nodes, ascending.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Outgoing edges; empty for unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of undirected connections.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Dijkstra from `start` to `end`.
    ///
    /// Nodes missing from the graph simply have no edges; the only failure is
    /// `RouteError::Unreachable`.
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Result<Route, RouteError> {
        let mut dist: HashMap<NodeId, u64> = HashMap::with_capacity(self.adjacency.len());
        let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
        let mut frontier: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();

        dist.insert(start, 0);
        frontier.push(Reverse((0, start)));

        while let Some(Reverse((d, node))) = frontier.pop() {
            // Stale entry: a shorter distance was already settled.
            if dist.get(&node).is_some_and(|&best| d > best) {
                continue;
            }
            if node == end {
                break;
            }

            for edge in self.neighbors(node) {
                let candidate = d + u64::from(edge.weight);
                let improves = dist.get(&edge.to).is_none_or(|&best| candidate < best);
                if improves {
                    dist.insert(edge.to, candidate);
                    parent.insert(edge.to, node);
                    frontier.push(Reverse((candidate, edge.to)));
                }
            }
        }

        let Some(&cost) = dist.get(&end) else {
            tracing::debug!(from = %start, to = %end, "route unreachable");
            return Err(RouteError::Unreachable {
                from: start,
                to: end,
            });
        };

        let mut path = vec![end];
        let mut cursor = end;
        while cursor != start {
            match parent.get(&cursor) {
                Some(&prev) => {
                    path.push(prev);
                    cursor = prev;
                }
                None => break,
            }
        }
        path.reverse();

        tracing::debug!(from = %start, to = %end, cost, hops = path.len(), "route resolved");
        Ok(Route { cost, path })
    }
}
