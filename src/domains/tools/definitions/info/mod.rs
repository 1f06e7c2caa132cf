//! Introspection tools describing the server and its catalog.

pub mod allatools;
pub mod get_info;

pub use allatools::AllaToolsTool;
pub use get_info::GetInfoTool;
