use serde::Serialize;

use wareflow_catalog::Product;
use wareflow_core::{ItemId, NodeId, OrderId, ProductId};
use wareflow_fulfillment::Order;
use wareflow_inventory::InventoryItem;
use wareflow_routing::{Route, WarehouseGraph};

// -------------------------
// Read views
// -------------------------

/// One order as listed by `GET_STATE`.
///
/// `text` and `prio` are the keys UI clients render; the rest is detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub text: String,
    pub prio: i32,
    pub item_id: ItemId,
    pub item: String,
    pub qty: u32,
    pub location: NodeId,
}

impl OrderView {
    /// Waiting in the priority queue.
    pub fn pending(order: Order) -> Self {
        let text = format!("Item: {} (Prio: {})", order.item_name, order.priority);
        Self::with_text(order, text)
    }

    /// Routed and waiting for dispatch.
    pub fn dispatched(order: Order) -> Self {
        let text = format!("Item: {} (Sent)", order.item_name);
        Self::with_text(order, text)
    }

    fn with_text(order: Order, text: String) -> Self {
        Self {
            id: order.id,
            text,
            prio: order.priority,
            item_id: order.item_id,
            item: order.item_name,
            qty: order.quantity,
            location: order.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockView {
    pub id: ItemId,
    pub name: String,
    pub qty: u32,
    pub loc: NodeId,
}

impl From<InventoryItem> for StockView {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            qty: item.quantity,
            loc: item.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub cat: String,
    /// Whole currency units, e.g. `25.5`.
    pub price: f64,
    pub price_cents: u64,
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            cat: p.category.clone(),
            price: p.price_cents as f64 / 100.0,
            price_cents: p.price_cents,
        }
    }
}

/// Full `GET_STATE` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateView {
    pub pending: Vec<OrderView>,
    /// Processed and waiting for dispatch, oldest first.
    pub dispatched: Vec<OrderView>,
    pub inventory: Vec<StockView>,
    pub catalog: Vec<ProductView>,
    pub can_undo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteView {
    pub cost: u64,
    pub path: Vec<NodeId>,
}

impl From<Route> for RouteView {
    fn from(route: Route) -> Self {
        Self {
            cost: route.cost,
            path: route.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborView {
    pub to: NodeId,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub node: NodeId,
    pub edges: Vec<NeighborView>,
}

/// Adjacency listing in ascending node order.
pub fn graph_view(graph: &WarehouseGraph) -> Vec<NodeView> {
    graph
        .nodes()
        .into_iter()
        .map(|node| NodeView {
            node,
            edges: graph
                .neighbors(node)
                .iter()
                .map(|e| NeighborView {
                    to: e.to,
                    weight: e.weight,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop_order() -> Order {
        Order {
            id: OrderId::new(3),
            priority: 5,
            item_id: ItemId::new(101),
            item_name: "Laptop".to_string(),
            quantity: 2,
            location: NodeId::new(7),
        }
    }

    #[test]
    fn pending_orders_carry_display_text_and_prio() {
        let json = serde_json::to_value(OrderView::pending(laptop_order())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3, "text": "Item: Laptop (Prio: 5)", "prio": 5,
                "item_id": 101, "item": "Laptop", "qty": 2, "location": 7
            })
        );
    }

    #[test]
    fn dispatched_orders_are_marked_sent() {
        let view = OrderView::dispatched(laptop_order());
        assert_eq!(view.text, "Item: Laptop (Sent)");
    }

    #[test]
    fn product_price_is_reported_in_currency_units() {
        let mouse = Product::new(ProductId::new(102), "Mouse", "Accessories", 2_550);
        let json = serde_json::to_value(ProductView::from(&mouse)).unwrap();
        assert_eq!(json["cat"], "Accessories");
        assert_eq!(json["price"], 25.5);
        assert_eq!(json["price_cents"], 2_550);
    }

    #[test]
    fn graph_view_lists_both_directions() {
        let mut g = WarehouseGraph::new();
        g.add_edge(NodeId::new(0), NodeId::new(1), 5);

        let view = graph_view(&g);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].node, NodeId::new(0));
        assert_eq!(view[0].edges, vec![NeighborView { to: NodeId::new(1), weight: 5 }]);
        assert_eq!(view[1].edges[0].to, NodeId::new(0));
    }
}
