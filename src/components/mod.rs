//! UI components.

pub mod chart;
pub mod results;
