//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod info;
pub mod math;
pub mod text;
pub mod weather;

pub use info::{AllaToolsTool, GetInfoTool};
pub use math::CalculateTool;
pub use text::{FormatDataTool, ListItemsTool, TataTool, UniversalTool};
pub use weather::WeatherTool;
