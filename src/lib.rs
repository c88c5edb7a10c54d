//! smtgen: Synthetic SMT assembly process datasets
//!
//! Generates synthetic surface-mount assembly datasets (soldering/placement
//! parameters versus defect counts and cycle time) and benchmarks simple
//! regression models against them.

pub mod cli;
pub mod core;
pub mod dataset;
pub mod ml;
