//! Text tools: greeting, repetition, list joining and mapping formatting.

pub mod format_data;
pub mod list_items;
pub mod tata;
pub mod universal;

pub use format_data::FormatDataTool;
pub use list_items::ListItemsTool;
pub use tata::TataTool;
pub use universal::UniversalTool;
