//! Dashboard panels

pub mod chart;
pub mod footer;
pub mod header;
pub mod logs;
pub mod table;
