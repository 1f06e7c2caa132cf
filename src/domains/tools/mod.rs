//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to perform
//! specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `catalog.rs` - Immutable name → descriptor registry, built once at startup
//! - `dispatcher.rs` - Argument validation, handler invocation, outcome mapping
//! - `handlers.rs` - The handler trait and the result type
//! - `params.rs` - Shared parameter structs and lenient decoders
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Declare a `#[derive(Deserialize, JsonSchema)]` params struct, `NAME`,
//!    `DESCRIPTION`, a `descriptor()` and a `ToolHandler` impl
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `ToolCatalog::builtin`
//!
//! Every transport goes through the same [`Dispatcher`], so nothing else
//! needs to change.

pub mod catalog;
pub mod definitions;
pub mod dispatcher;
mod error;
pub mod handlers;
pub mod params;

pub use catalog::{ToolCatalog, ToolDescriptor};
pub use dispatcher::{Dispatcher, InvocationRequest};
pub use error::ToolError;
pub use handlers::*;
