//! Dispatcher - resolves a tool by name, validates its arguments, runs the
//! handler and normalizes the outcome.
//!
//! Every call yields an [`InvocationResult`]. Unknown tools, bad arguments,
//! handler errors and handler panics all come back as
//! [`InvocationResult::Failure`]; nothing escapes to the transport.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::model::JsonObject;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::catalog::ToolCatalog;
use super::error::ToolError;
use super::handlers::{InvocationResult, ToolContext};

/// A single tool call as received from a transport.
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationRequest {
    pub name: String,
    #[serde(default)]
    pub arguments: JsonObject,
}

/// Routes invocations to the handlers of a shared, immutable catalog.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    catalog: Arc<ToolCatalog>,
}

impl Dispatcher {
    pub fn new(catalog: Arc<ToolCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Dispatch a deserialized request.
    pub async fn dispatch(&self, request: InvocationRequest) -> InvocationResult {
        self.invoke(&request.name, &request.arguments).await
    }

    /// Invoke a tool by name with raw arguments.
    #[instrument(skip(self, arguments), fields(tool = %name))]
    pub async fn invoke(&self, name: &str, arguments: &JsonObject) -> InvocationResult {
        let descriptor = match self.catalog.lookup(name) {
            Ok(d) => d,
            Err(e) => {
                warn!("Unknown tool requested: {}", name);
                return InvocationResult::failure(e.to_string());
            }
        };

        for key in arguments.keys() {
            if !descriptor.declares(key) {
                debug!("Ignoring undeclared argument '{}' for {}", key, name);
            }
        }

        let ctx = ToolContext::new(&self.catalog);
        let call = match descriptor.handler.bind(arguments, ctx) {
            Ok(call) => call,
            Err(e) => {
                warn!("Rejected arguments for {}: {}", name, e);
                return InvocationResult::failure(e.to_string());
            }
        };

        info!("Invoking tool: {}", name);
        match AssertUnwindSafe(call).catch_unwind().await {
            Ok(Ok(text)) => InvocationResult::Success(text),
            Ok(Err(e)) => {
                warn!("Tool {} failed: {}", name, e);
                InvocationResult::failure(e.to_string())
            }
            Err(panic) => {
                let detail = panic_message(panic.as_ref());
                warn!("Tool {} panicked: {}", name, detail);
                InvocationResult::failure(format!("Tool '{}' panicked: {}", name, detail))
            }
        }
    }
}

/// Decode raw arguments into a tool's parameter struct.
///
/// `null` counts as absent, so optional parameters fall back to their
/// defaults. Errors name the offending parameter.
pub fn validate_arguments<P: DeserializeOwned>(arguments: &JsonObject) -> Result<P, ToolError> {
    let present: JsonObject = arguments
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let error = match decode::<P>(&present) {
        Ok(params) => return Ok(params),
        Err(e) => e.to_string(),
    };

    if let Some(name) = missing_field(&error) {
        return Err(ToolError::missing_argument(name));
    }

    // serde reports the first bad value without its key; the offending key is
    // the one whose removal changes the outcome.
    let offending = present.keys().find(|key| {
        let without: JsonObject = present
            .iter()
            .filter(|(other, _)| other != key)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        match decode::<P>(&without) {
            Ok(_) => true,
            Err(e) => e.to_string() != error,
        }
    });

    Err(match offending {
        Some(name) => ToolError::invalid_argument(name.as_str(), error),
        None => ToolError::invalid_arguments(error),
    })
}

fn decode<P: DeserializeOwned>(arguments: &JsonObject) -> Result<P, serde_json::Error> {
    P::deserialize(&Value::Object(arguments.clone()))
}

/// Field name from serde's "missing field `x`" message.
fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split_once('`'))
        .map(|(name, _)| name)
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::tools::catalog::ToolDescriptor;
    use crate::domains::tools::handlers::ToolHandler;
    use crate::domains::tools::params::{NoParams, number_or_numeric_string};
    use serde_json::json;

    struct Exploding;

    #[derive(Deserialize, schemars::JsonSchema)]
    struct ExplodingParams {
        #[allow(dead_code)]
        x: String,
    }

    #[async_trait::async_trait]
    impl ToolHandler for Exploding {
        type Params = ExplodingParams;

        async fn call(&self, _params: ExplodingParams, _ctx: ToolContext<'_>) -> Result<String, ToolError> {
            panic!("boom");
        }
    }

    struct Failing;

    #[async_trait::async_trait]
    impl ToolHandler for Failing {
        type Params = NoParams;

        async fn call(&self, _params: NoParams, _ctx: ToolContext<'_>) -> Result<String, ToolError> {
            Err(ToolError::execution_failed("disk on fire"))
        }
    }

    #[derive(Debug, Deserialize)]
    struct Pair {
        #[serde(deserialize_with = "number_or_numeric_string")]
        a: f64,
        #[serde(default)]
        label: String,
    }

    fn dispatcher() -> Dispatcher {
        let catalog = ToolCatalog::builtin(&Config::default()).unwrap();
        Dispatcher::new(Arc::new(catalog))
    }

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[tokio::test]
    async fn test_unknown_tool_is_failure() {
        let result = dispatcher().invoke("does_not_exist", &JsonObject::new()).await;
        assert_eq!(
            result,
            InvocationResult::Failure("Tool not found: does_not_exist".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let result = dispatcher().invoke("universal", &JsonObject::new()).await;
        assert!(result.is_failure());
        assert!(result.text().contains("'value'"));
    }

    #[tokio::test]
    async fn test_uncoercible_number_names_parameter() {
        let args = object(json!({ "operation": "add", "a": "two", "b": 3 }));
        let result = dispatcher().invoke("calculate", &args).await;
        assert!(result.is_failure());
        assert!(result.text().contains("parameter 'a'"));
    }

    #[tokio::test]
    async fn test_wrong_type_names_second_parameter() {
        let args = object(json!({ "operation": "add", "a": 1, "b": [3] }));
        let result = dispatcher().invoke("calculate", &args).await;
        assert!(result.text().starts_with("Invalid arguments: parameter 'b'"));

        let args = object(json!({ "items": ["a", 2] }));
        let result = dispatcher().invoke("list_items", &args).await;
        assert!(result.text().starts_with("Invalid arguments: parameter 'items'"));
    }

    #[tokio::test]
    async fn test_string_parameter_rejects_number() {
        let args = object(json!({ "value": 5 }));
        let result = dispatcher().invoke("universal", &args).await;
        assert!(result.is_failure());
        assert!(result.text().contains("parameter 'value'"));
    }

    #[test]
    fn test_validate_arguments_decodes_params() {
        let pair: Pair = validate_arguments(&object(json!({ "a": " 2.5 ", "label": null }))).unwrap();
        assert_eq!(pair.a, 2.5);
        assert_eq!(pair.label, "");

        let err = validate_arguments::<Pair>(&object(json!({ "label": "x" }))).unwrap_err();
        assert!(matches!(err, ToolError::MissingArgument(name) if name == "a"));

        let err = validate_arguments::<Pair>(&object(json!({ "label": 1, "a": 1 }))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument { name, .. } if name == "label"));
    }

    #[tokio::test]
    async fn test_numeric_strings_are_coerced() {
        let args = object(json!({ "operation": "add", "a": "2", "b": "3" }));
        let result = dispatcher().invoke("calculate", &args).await;
        assert_eq!(result, InvocationResult::success("add(2.0, 3.0) = 5.0"));
    }

    #[tokio::test]
    async fn test_division_by_zero_is_success() {
        let args = object(json!({ "operation": "divide", "a": 7, "b": 0 }));
        let result = dispatcher().invoke("calculate", &args).await;
        assert_eq!(
            result,
            InvocationResult::success("divide(7.0, 0.0) = Error: Division by zero")
        );
    }

    #[tokio::test]
    async fn test_null_argument_uses_default() {
        let args = object(json!({ "items": ["a", "b"], "separator": null }));
        let result = dispatcher().invoke("list_items", &args).await;
        assert_eq!(result, InvocationResult::success("a, b"));
    }

    #[tokio::test]
    async fn test_extra_arguments_ignored() {
        let args = object(json!({ "unexpected": 1 }));
        let result = dispatcher().invoke("tata", &args).await;
        assert_eq!(result, InvocationResult::success("terve Maailma"));
    }

    #[tokio::test]
    async fn test_handler_error_becomes_failure() {
        let mut catalog = ToolCatalog::new();
        catalog
            .register(ToolDescriptor::new("failing", "always fails", Failing))
            .unwrap();
        let dispatcher = Dispatcher::new(Arc::new(catalog));

        let result = dispatcher.invoke("failing", &JsonObject::new()).await;
        assert_eq!(
            result,
            InvocationResult::Failure("Execution failed: disk on fire".to_string())
        );
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_failure() {
        let mut catalog = ToolCatalog::new();
        catalog
            .register(ToolDescriptor::new("exploding", "always panics", Exploding))
            .unwrap();
        let dispatcher = Dispatcher::new(Arc::new(catalog));

        let result = dispatcher
            .invoke("exploding", &object(json!({ "x": "y" })))
            .await;
        assert_eq!(
            result,
            InvocationResult::Failure("Tool 'exploding' panicked: boom".to_string())
        );
    }

    #[tokio::test]
    async fn test_dispatch_request_without_arguments() {
        let request: InvocationRequest = serde_json::from_value(json!({ "name": "tata" })).unwrap();
        let result = dispatcher().dispatch(request).await;
        assert_eq!(result, InvocationResult::success("terve Maailma"));
    }

    #[test]
    fn test_invoke_blocking() {
        let dispatcher = dispatcher();
        let args = object(json!({ "items": ["a", "b", "c"], "separator": "|" }));
        let result = tokio_test::block_on(dispatcher.invoke("list_items", &args));
        assert_eq!(result, InvocationResult::success("a|b|c"));
    }
}
