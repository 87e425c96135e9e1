//! Warehouse seed data: layout, stock and catalog loaded at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wareflow_catalog::{Product, ProductCatalog};
use wareflow_core::{DomainError, ItemId, NodeId, ProductId};
use wareflow_inventory::{Inventory, InventoryItem};
use wareflow_routing::WarehouseGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSeed {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WarehouseSeed {
    #[serde(default)]
    pub edges: Vec<EdgeSeed>,
    #[serde(default)]
    pub items: Vec<InventoryItem>,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed entry: {0}")]
    Invalid(#[from] DomainError),
}

/// Built collaborators, ready to hand to a session.
#[derive(Debug, Clone)]
pub struct SeededWarehouse {
    pub graph: WarehouseGraph,
    pub inventory: Inventory,
    pub catalog: ProductCatalog,
}

impl WarehouseSeed {
    /// The reference ten-node warehouse with five stocked products.
    pub fn default_layout() -> Self {
        let edges = [
            (0, 1, 5),
            (0, 2, 7),
            (1, 3, 4),
            (1, 4, 3),
            (2, 5, 2),
            (2, 6, 5),
            (4, 7, 6),
            (5, 8, 4),
            (6, 9, 3),
            (3, 7, 2),
            (8, 9, 1),
        ]
        .into_iter()
        .map(|(from, to, weight)| EdgeSeed {
            from: NodeId::new(from),
            to: NodeId::new(to),
            weight,
        })
        .collect();

        let stock = [
            (101, "Laptop", 50, 7, "Electronics", 120_000),
            (102, "Mouse", 100, 3, "Accessories", 2_550),
            (103, "Keyboard", 80, 4, "Accessories", 4_500),
            (104, "Monitor", 30, 8, "Electronics", 30_000),
            (105, "Headphones", 60, 9, "Audio", 8_000),
        ];

        let items = stock
            .iter()
            .map(|&(id, name, qty, loc, _, _)| {
                InventoryItem::new(ItemId::new(id), name, qty, NodeId::new(loc))
            })
            .collect();

        let products = stock
            .iter()
            .map(|&(id, name, _, _, category, price)| {
                Product::new(ProductId::new(id), name, category, price)
            })
            .collect();

        Self {
            edges,
            items,
            products,
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Validate every entry and build the collaborators.
    pub fn build(self) -> Result<SeededWarehouse, SeedError> {
        let mut graph = WarehouseGraph::new();
        for edge in self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight);
        }

        let mut inventory = Inventory::new();
        for item in self.items {
            inventory.add_item(item)?;
        }

        let mut catalog = ProductCatalog::new();
        for product in self.products {
            catalog.insert(product)?;
        }

        tracing::info!(
            nodes = graph.nodes().len(),
            edges = graph.edge_count(),
            items = inventory.len(),
            products = catalog.len(),
            "warehouse seeded"
        );

        Ok(SeededWarehouse {
            graph,
            inventory,
            catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wareflow_inventory::StockLedger;

    #[test]
    fn default_layout_builds_reference_warehouse() {
        let built = WarehouseSeed::default_layout().build().unwrap();

        assert_eq!(built.graph.edge_count(), 11);
        assert_eq!(built.inventory.len(), 5);
        assert_eq!(built.catalog.len(), 5);

        let laptop = built.inventory.get(ItemId::new(101)).unwrap();
        assert_eq!(laptop.quantity, 50);
        assert_eq!(laptop.location, NodeId::new(7));
        assert_eq!(
            built.catalog.find(ProductId::new(102)).unwrap().price_cents,
            2_550
        );
    }

    #[test]
    fn parses_json_seed_with_missing_sections() {
        let seed = WarehouseSeed::from_json_str(
            r#"{
                "edges": [{ "from": 0, "to": 1, "weight": 4 }],
                "items": [{ "id": 7, "name": "Bolt", "quantity": 3, "location": 1 }]
            }"#,
        )
        .unwrap();
        assert!(seed.products.is_empty());

        let built = seed.build().unwrap();
        assert!(built.inventory.has_stock(ItemId::new(7), 3));
        assert_eq!(
            built.graph.shortest_path(NodeId::new(0), NodeId::new(1)).unwrap().cost,
            4
        );
    }

    #[test]
    fn negative_weights_are_rejected_at_parse_time() {
        let err = WarehouseSeed::from_json_str(r#"{ "edges": [{ "from": 0, "to": 1, "weight": -2 }] }"#)
            .unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn duplicate_items_are_reported() {
        let mut seed = WarehouseSeed::default_layout();
        let again = seed.items[0].clone();
        seed.items.push(again);

        assert!(matches!(
            seed.build().unwrap_err(),
            SeedError::Invalid(DomainError::Conflict(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = WarehouseSeed::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}
