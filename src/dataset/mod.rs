//! Dataset module - synthetic dataset generation pipelines
//!
//! Two single-pass pipelines share the same shape: sample features, evaluate
//! the response model, serialize one row. Rows are written as they are
//! produced and never retained.

pub mod assembly;
pub mod line;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to serialize dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub use assembly::{AssemblyConfig, AssemblyRun};
pub use line::{GaussianSpec, LineConfig, LineSample};
