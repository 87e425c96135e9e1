//! Warehouse routing module.
//!
//! Weighted, undirected location graph and least-cost path queries.

pub mod graph;

pub use graph::{Edge, Route, RouteError, WarehouseGraph};
