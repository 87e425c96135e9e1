use serde_json::{Value, json};

use wareflow_cli::{Session, WarehouseSeed};

fn session() -> Session {
    Session::new(WarehouseSeed::default_layout().build().unwrap())
}

fn send(s: &mut Session, line: &str) -> Value {
    s.handle_line(line).expect("non-blank line yields a response")
}

fn stock_of(state: &Value, item: u64) -> u64 {
    state["inventory"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["id"] == item)
        .unwrap()["qty"]
        .as_u64()
        .unwrap()
}

#[test]
fn add_then_undo_restores_stock() {
    let mut s = session();

    let placed = send(&mut s, "ADD_ORDER 101 10 5");
    assert_eq!(placed["status"], "success");
    assert_eq!(placed["msg"], "Order placed");
    assert_eq!(placed["order_id"], 1);

    let state = send(&mut s, "GET_STATE");
    assert_eq!(stock_of(&state, 101), 40);
    assert_eq!(state["pending"][0]["item"], "Laptop");

    assert_eq!(send(&mut s, "UNDO")["status"], "success");

    let state = send(&mut s, "GET_STATE");
    assert_eq!(stock_of(&state, 101), 50);
    assert_eq!(state["pending"], json!([]));
    assert_eq!(state["can_undo"], false);
}

#[test]
fn higher_priority_is_processed_first() {
    let mut s = session();
    send(&mut s, "ADD_ORDER 102 1 3");
    send(&mut s, "ADD_ORDER 103 1 9");

    let first = send(&mut s, "PROCESS");
    assert_eq!(first["order_id"], 2);

    let second = send(&mut s, "PROCESS");
    assert_eq!(second["order_id"], 1);

    let shipped = send(&mut s, "DISPATCH");
    assert_eq!(shipped["order_id"], 2);
}

#[test]
fn empty_queues_report_errors() {
    let mut s = session();

    assert_eq!(send(&mut s, "DISPATCH")["status"], "error");
    assert_eq!(send(&mut s, "PROCESS")["status"], "error");

    let undo = send(&mut s, "UNDO");
    assert_eq!(undo["status"], "error");
    assert_eq!(undo["msg"], "Nothing to undo");
}

#[test]
fn insufficient_stock_leaves_state_unchanged() {
    let mut s = session();
    let before = send(&mut s, "GET_STATE");

    let v = send(&mut s, "ADD_ORDER 104 31 1");
    assert_eq!(v["status"], "error");
    assert_eq!(send(&mut s, "ADD_ORDER 999 1 1")["status"], "error");
    assert_eq!(send(&mut s, "ADD_ORDER 104 0 1")["status"], "error");

    assert_eq!(send(&mut s, "GET_STATE"), before);
}

#[test]
fn route_queries_the_warehouse_graph() {
    let mut s = session();

    let v = send(&mut s, "ROUTE 0 7");
    assert_eq!(v["status"], "success");
    assert_eq!(v["cost"], 11);
    assert_eq!(v["path"], json!([0, 1, 3, 7]));

    assert_eq!(send(&mut s, "ROUTE 0 42")["status"], "error");
}

#[test]
fn unknown_commands_are_rejected() {
    let mut s = session();
    assert_eq!(
        send(&mut s, "FLY_AWAY"),
        json!({ "status": "error", "code": "unknown_command", "msg": "Unknown command" })
    );
}

#[test]
fn get_state_is_idempotent() {
    let mut s = session();
    send(&mut s, "ADD_ORDER 105 2 4");
    send(&mut s, "ADD_ORDER 101 1 8");
    send(&mut s, "PROCESS");

    let a = send(&mut s, "GET_STATE");
    let b = send(&mut s, "GET_STATE");
    assert_eq!(a, b);
    assert_eq!(a["dispatched"].as_array().unwrap().len(), 1);
    assert_eq!(a["catalog"].as_array().unwrap().len(), 5);
}

#[test]
fn processed_but_shipped_order_cannot_be_undone() {
    let mut s = session();
    send(&mut s, "ADD_ORDER 101 1 1");
    send(&mut s, "PROCESS");
    send(&mut s, "DISPATCH");

    let v = send(&mut s, "UNDO");
    assert_eq!(v["status"], "error");
    assert_eq!(v["code"], "dispatch_queue_empty");

    // Shipped stock stays shipped.
    let state = send(&mut s, "GET_STATE");
    assert_eq!(stock_of(&state, 101), 49);
}

#[test]
fn get_state_uses_the_ui_field_names() {
    let mut s = session();
    send(&mut s, "ADD_ORDER 101 10 5");
    send(&mut s, "ADD_ORDER 102 1 2");
    send(&mut s, "PROCESS");

    let state = send(&mut s, "GET_STATE");

    let pending = &state["pending"][0];
    assert_eq!(pending["text"], "Item: Mouse (Prio: 2)");
    assert_eq!(pending["prio"], 2);

    let ready = &state["dispatched"][0];
    assert_eq!(ready["text"], "Item: Laptop (Sent)");

    let laptop = &state["inventory"][0];
    assert_eq!(laptop["name"], "Laptop");
    assert_eq!(laptop["qty"], 40);
    assert_eq!(laptop["loc"], 7);

    let mouse = &state["catalog"][1];
    assert_eq!(mouse["cat"], "Accessories");
    assert_eq!(mouse["price"], 25.5);
    assert_eq!(state["catalog"][0]["price"], 1200.0);
}
