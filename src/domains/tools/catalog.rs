//! Tool Catalog - the immutable registry of tool descriptors.
//!
//! The catalog is built once at startup by [`ToolCatalog::builtin`] and then
//! shared read-only (behind an `Arc`) by every dispatch call. It keeps the
//! registration order so listings are stable and human-readable. Input
//! schemas are generated from each tool's `Params` struct.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use tracing::debug;

use super::definitions::{
    AllaToolsTool, CalculateTool, FormatDataTool, GetInfoTool, ListItemsTool, TataTool,
    UniversalTool, WeatherTool,
};
use super::error::ToolError;
use super::handlers::{BoundHandler, ToolHandler, Typed};
use crate::core::config::Config;

// ============================================================================
// Descriptor
// ============================================================================

/// A registered tool: name, input schema and handler.
#[derive(Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON schema of the handler's `Params` struct.
    pub input_schema: Arc<JsonObject>,
    pub handler: Arc<dyn BoundHandler>,
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("parameters", &self.parameter_names())
            .finish_non_exhaustive()
    }
}

impl ToolDescriptor {
    pub fn new<H: ToolHandler>(name: &'static str, description: &'static str, handler: H) -> Self {
        Self {
            name,
            description,
            input_schema: schema_for_type::<H::Params>().into(),
            handler: Arc::new(Typed(handler)),
        }
    }

    fn properties(&self) -> Option<&serde_json::Map<String, Value>> {
        self.input_schema.get("properties").and_then(Value::as_object)
    }

    /// Declared parameter names, in declaration order.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.properties()
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether `name` is one of the declared parameters.
    pub fn declares(&self, name: &str) -> bool {
        self.properties().is_some_and(|props| props.contains_key(name))
    }

    /// Names of the parameters without a default.
    pub fn required_parameters(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Create a Tool model for this descriptor (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, self.input_schema.clone())
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Name-keyed registry of tool descriptors.
#[derive(Debug, Default)]
pub struct ToolCatalog {
    tools: HashMap<&'static str, ToolDescriptor>,
    order: Vec<&'static str>,
}

impl ToolCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog of all built-in tools.
    pub fn builtin(config: &Config) -> Result<Self, ToolError> {
        let mut catalog = Self::new();
        catalog.register(TataTool::descriptor())?;
        catalog.register(UniversalTool::descriptor())?;
        catalog.register(CalculateTool::descriptor())?;
        catalog.register(GetInfoTool::descriptor())?;
        catalog.register(ListItemsTool::descriptor())?;
        catalog.register(FormatDataTool::descriptor())?;
        catalog.register(WeatherTool::descriptor(&config.weather)?)?;
        catalog.register(AllaToolsTool::descriptor())?;
        Ok(catalog)
    }

    /// Register a descriptor. Fails if the name is already taken.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), ToolError> {
        if self.tools.contains_key(descriptor.name) {
            return Err(ToolError::duplicate(descriptor.name));
        }
        debug!("Registering tool: {}", descriptor.name);
        self.order.push(descriptor.name);
        self.tools.insert(descriptor.name, descriptor);
        Ok(())
    }

    /// Look up a descriptor by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.tools.get(name).ok_or_else(|| ToolError::not_found(name))
    }

    /// All tool names, in registration order.
    pub fn list(&self) -> Vec<&'static str> {
        self.order.clone()
    }

    /// All tools as Tool models, in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(ToolDescriptor::to_tool)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
