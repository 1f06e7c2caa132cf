pub mod calculate;

pub use calculate::CalculateTool;
