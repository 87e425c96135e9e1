//! One in-memory warehouse driven by line commands.

use serde::Serialize;
use serde_json::{Value, json};

use wareflow_catalog::ProductCatalog;
use wareflow_fulfillment::{OrderLifecycleCoordinator, UndoOutcome};
use wareflow_inventory::Inventory;

use crate::command::Command;
use crate::dto::{self, OrderView, ProductView, RouteView, StateView, StockView};
use crate::errors;
use crate::seed::SeededWarehouse;

#[derive(Serialize)]
struct Success<T> {
    status: &'static str,
    #[serde(flatten)]
    body: T,
}

fn success(body: impl Serialize) -> Value {
    serde_json::to_value(Success {
        status: "success",
        body,
    })
    .unwrap_or_else(|e| errors::json_error("serialize_error", e.to_string()))
}

#[derive(Debug, Clone)]
pub struct Session {
    coordinator: OrderLifecycleCoordinator,
    inventory: Inventory,
    catalog: ProductCatalog,
}

impl Session {
    pub fn new(warehouse: SeededWarehouse) -> Self {
        Self {
            coordinator: OrderLifecycleCoordinator::new(warehouse.graph),
            inventory: warehouse.inventory,
            catalog: warehouse.catalog,
        }
    }

    /// Parse and run one line. Blank lines produce no response.
    pub fn handle_line(&mut self, line: &str) -> Option<Value> {
        if line.trim().is_empty() {
            return None;
        }
        let response = match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e) => {
                tracing::debug!(line, error = %e, "rejected command line");
                errors::command_error_to_response(e)
            }
        };
        Some(response)
    }

    pub fn execute(&mut self, command: Command) -> Value {
        match command {
            Command::AddOrder {
                item,
                quantity,
                priority,
            } => match self
                .coordinator
                .admit_order(&mut self.inventory, item, quantity, priority)
            {
                Ok(order_id) => json!({
                    "status": "success",
                    "msg": "Order placed",
                    "order_id": order_id,
                }),
                Err(e) => errors::fulfillment_error_to_response(e),
            },

            Command::Process => match self.coordinator.process_next() {
                Ok(processed) => json!({
                    "status": "success",
                    "msg": "Processed",
                    "order_id": processed.order.id,
                    "cost": processed.route.cost,
                    "path": processed.route.path,
                }),
                Err(e) => errors::fulfillment_error_to_response(e),
            },

            Command::Dispatch => match self.coordinator.dispatch_next() {
                Ok(order) => json!({
                    "status": "success",
                    "msg": "Dispatched",
                    "order_id": order.id,
                }),
                Err(e) => errors::fulfillment_error_to_response(e),
            },

            Command::Undo => match self.coordinator.undo_last(&mut self.inventory) {
                Ok(outcome) => {
                    let msg = match &outcome {
                        UndoOutcome::Admission { order_id, .. } => {
                            format!("Undid order {order_id}")
                        }
                        UndoOutcome::Process { order_id } => {
                            format!("Undid processing of order {order_id}")
                        }
                    };
                    json!({
                        "status": "success",
                        "msg": msg,
                        "undone": outcome,
                    })
                }
                Err(e) => errors::fulfillment_error_to_response(e),
            },

            Command::GetState => success(self.state()),

            Command::Route { from, to } => {
                match self.coordinator.graph().shortest_path(from, to) {
                    Ok(route) => success(RouteView::from(route)),
                    Err(e) => errors::route_error_to_response(e),
                }
            }

            Command::Graph => json!({
                "status": "success",
                "graph": dto::graph_view(self.coordinator.graph()),
            }),
        }
    }

    pub fn state(&self) -> StateView {
        StateView {
            pending: self
                .coordinator
                .list_pending()
                .into_iter()
                .map(OrderView::pending)
                .collect(),
            dispatched: self
                .coordinator
                .list_ready()
                .into_iter()
                .map(OrderView::dispatched)
                .collect(),
            inventory: self
                .inventory
                .items()
                .into_iter()
                .map(StockView::from)
                .collect(),
            catalog: self
                .catalog
                .in_order()
                .into_iter()
                .map(ProductView::from)
                .collect(),
            can_undo: self.coordinator.can_undo(),
        }
    }

    pub fn coordinator(&self) -> &OrderLifecycleCoordinator {
        &self.coordinator
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }
}
