//! ML module - the regression benchmark consuming the line dataset
//!
//! Mirrors the collaborator contract the generator serves: load a typed
//! table, split train/test, fit a regressor, report RMSE and R². The only
//! obligation the dataset side has to this module is a well-formed CSV with
//! the documented column order.

pub mod data;
pub mod linear;
pub mod metrics;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MlError {
    #[error("Training data not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read training data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Training set is empty")]
    EmptyTrainingSet,

    #[error("Design matrix is singular; cannot solve for coefficients")]
    SingularMatrix,
}

pub use data::{Label, LineDataset, LineRecord};
pub use linear::LinearModel;
pub use metrics::{evaluate, RegressionMetrics};
