use serde_json::{Value, json};

use wareflow_fulfillment::FulfillmentError;
use wareflow_routing::RouteError;

use crate::command::CommandError;

pub fn fulfillment_error_to_response(err: FulfillmentError) -> Value {
    match err {
        FulfillmentError::InvalidItemOrStock => {
            json_error("invalid_item_or_stock", "Invalid item or insufficient stock")
        }
        FulfillmentError::EmptyQueue => json_error("empty_queue", "Queue is empty"),
        FulfillmentError::UnreachableLocation { .. } => {
            json_error("unreachable", "Location unreachable")
        }
        FulfillmentError::NothingToUndo => json_error("nothing_to_undo", "Nothing to undo"),
        FulfillmentError::DispatchQueueEmpty => json_error(
            "dispatch_queue_empty",
            "Cannot undo: order already dispatched",
        ),
        FulfillmentError::OrderNotPending(id) => json_error(
            "invariant_violation",
            format!("Order {id} is no longer pending"),
        ),
        FulfillmentError::StockNotRestored { order_id, .. } => json_error(
            "stock_not_restored",
            format!("Stock for order {order_id} could not be returned"),
        ),
        FulfillmentError::UnsupportedUndo => json!({
            "status": "warning",
            "code": "unsupported_undo",
            "msg": "Dispatch cannot be undone",
        }),
        FulfillmentError::Domain(e) => json_error("domain_error", e.to_string()),
    }
}

pub fn command_error_to_response(err: CommandError) -> Value {
    match err {
        CommandError::Unknown(_) => json_error("unknown_command", "Unknown command"),
        CommandError::Empty => json_error("unknown_command", "Unknown command"),
        other => json_error("bad_arguments", other.to_string()),
    }
}

pub fn route_error_to_response(err: RouteError) -> Value {
    match err {
        RouteError::Unreachable { .. } => json_error("unreachable", "No path"),
    }
}

pub fn json_error(code: &'static str, message: impl Into<String>) -> Value {
    json!({
        "status": "error",
        "code": code,
        "msg": message.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wareflow_core::OrderId;

    #[test]
    fn unsupported_undo_is_a_warning() {
        let v = fulfillment_error_to_response(FulfillmentError::UnsupportedUndo);
        assert_eq!(v["status"], "warning");
    }

    #[test]
    fn errors_carry_status_code_and_message() {
        let v = fulfillment_error_to_response(FulfillmentError::OrderNotPending(OrderId::new(4)));
        assert_eq!(v["status"], "error");
        assert_eq!(v["code"], "invariant_violation");
        assert_eq!(v["msg"], "Order 4 is no longer pending");
    }

    #[test]
    fn refused_stock_return_is_an_error() {
        let v = fulfillment_error_to_response(FulfillmentError::StockNotRestored {
            order_id: OrderId::new(2),
            item_id: wareflow_core::ItemId::new(101),
        });
        assert_eq!(v["status"], "error");
        assert_eq!(v["code"], "stock_not_restored");
    }

    #[test]
    fn unknown_commands_use_fixed_message() {
        let v = command_error_to_response(CommandError::Unknown("SHIP".into()));
        assert_eq!(v["msg"], "Unknown command");
    }
}
