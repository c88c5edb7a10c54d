//! Command implementations

pub mod generate;
pub mod scan;
pub mod train;
