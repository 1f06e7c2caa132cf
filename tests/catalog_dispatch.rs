//! End-to-end checks of the public catalog and dispatcher API.

use std::sync::Arc;

use serde_json::{Value, json};
use tata_mcp_server::domains::tools::InvocationRequest;
use tata_mcp_server::domains::tools::definitions::math::calculate::format_number;
use tata_mcp_server::{Config, Dispatcher, InvocationResult, McpServer, ToolCatalog};

fn dispatcher() -> Dispatcher {
    let catalog = ToolCatalog::builtin(&Config::default()).unwrap();
    Dispatcher::new(Arc::new(catalog))
}

fn args(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}

#[test]
fn lookup_returns_the_same_descriptor_every_time() {
    let dispatcher = dispatcher();
    let catalog = dispatcher.catalog();
    for name in catalog.list() {
        let first = catalog.lookup(name).unwrap();
        let second = catalog.lookup(name).unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(Arc::ptr_eq(&first.handler, &second.handler));
    }
}

#[tokio::test]
async fn divide_by_zero_is_a_success_for_any_dividend() {
    let dispatcher = dispatcher();
    for x in [0.0, 1.0, -3.5, 7.25, 1e20] {
        let result = dispatcher
            .invoke("calculate", &args(json!({ "operation": "divide", "a": x, "b": 0 })))
            .await;
        assert_eq!(
            result,
            InvocationResult::success(format!(
                "divide({}, 0.0) = Error: Division by zero",
                format_number(x)
            ))
        );
    }
}

#[tokio::test]
async fn calculate_add_and_unknown_operation() {
    let dispatcher = dispatcher();

    let add = dispatcher
        .invoke("calculate", &args(json!({ "operation": "add", "a": 2, "b": 3 })))
        .await;
    assert_eq!(add, InvocationResult::success("add(2.0, 3.0) = 5.0"));

    let unknown = dispatcher
        .invoke("calculate", &args(json!({ "operation": "modulo", "a": 1, "b": 1 })))
        .await;
    assert!(unknown.is_success());
    assert!(unknown.text().ends_with("Error: Unknown operation"));
}

#[tokio::test]
async fn list_items_uses_default_separator() {
    let result = dispatcher()
        .invoke("list_items", &args(json!({ "items": ["a", "b", "c"] })))
        .await;
    assert_eq!(result, InvocationResult::success("a, b, c"));
}

#[tokio::test]
async fn format_data_text_keeps_insertion_order() {
    let result = dispatcher()
        .invoke(
            "format_data",
            &args(json!({ "data": { "k": "v", "x": "y" }, "format_type": "text" })),
        )
        .await;
    assert_eq!(result, InvocationResult::success("k: v\nx: y"));
}

#[tokio::test]
async fn unknown_tool_is_a_failure_naming_the_tool() {
    let request: InvocationRequest =
        serde_json::from_value(json!({ "name": "frobnicate", "arguments": {} })).unwrap();
    let result = dispatcher().dispatch(request).await;
    assert_eq!(
        result,
        InvocationResult::failure("Tool not found: frobnicate")
    );
}

#[tokio::test]
async fn allatools_lists_every_registered_tool() {
    let dispatcher = dispatcher();
    let result = dispatcher.invoke("allatools", &args(json!({}))).await;
    assert_eq!(result.text(), dispatcher.catalog().list().join(", "));
}

#[tokio::test]
async fn server_exposes_the_builtin_catalog() {
    let server = McpServer::new(Config::default()).unwrap();
    let names: Vec<Value> = server
        .tool_listing()
        .into_iter()
        .map(|tool| tool["name"].clone())
        .collect();
    assert_eq!(
        names,
        vec![
            json!("tata"),
            json!("universal"),
            json!("calculate"),
            json!("get_info"),
            json!("list_items"),
            json!("format_data"),
            json!("get_linnanmaa_weather"),
            json!("allatools"),
        ]
    );
}
