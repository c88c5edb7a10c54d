//! Ordinary-least-squares regression over min-max normalized features

use nalgebra::{DMatrix, DVector};

use super::data::{Label, LineDataset};
use super::MlError;

const FEATURES: usize = 5;

/// Per-feature min/max observed on the training set, used to scale features
/// into [0,1] before fitting and prediction.
#[derive(Debug, Clone)]
struct MinMaxScaler {
    min: [f64; FEATURES],
    max: [f64; FEATURES],
}

impl MinMaxScaler {
    fn fit(data: &LineDataset) -> Self {
        let mut min = [f64::INFINITY; FEATURES];
        let mut max = [f64::NEG_INFINITY; FEATURES];
        for record in &data.records {
            for (i, value) in record.features().iter().enumerate() {
                min[i] = min[i].min(*value);
                max[i] = max[i].max(*value);
            }
        }
        Self { min, max }
    }

    fn transform(&self, features: &[f64; FEATURES]) -> [f64; FEATURES] {
        let mut scaled = [0.0; FEATURES];
        for i in 0..FEATURES {
            let span = self.max[i] - self.min[i];
            // A constant feature scales to 0 rather than dividing by zero.
            scaled[i] = if span > 0.0 {
                (features[i] - self.min[i]) / span
            } else {
                0.0
            };
        }
        scaled
    }
}

/// Linear regressor: y = β₀ + β·x over normalized features.
#[derive(Debug, Clone)]
pub struct LinearModel {
    scaler: MinMaxScaler,
    /// Intercept first, then one coefficient per feature.
    coefficients: Vec<f64>,
    label: Label,
}

impl LinearModel {
    /// Fit by least squares on the design matrix (SVD solve, so rank
    /// deficiency from constant features yields the minimum-norm solution
    /// instead of failing).
    pub fn fit(train: &LineDataset, label: Label) -> Result<Self, MlError> {
        if train.is_empty() {
            return Err(MlError::EmptyTrainingSet);
        }

        let scaler = MinMaxScaler::fit(train);
        let n = train.len();

        let mut design = DMatrix::zeros(n, FEATURES + 1);
        let mut response = DVector::zeros(n);
        for (row, record) in train.records.iter().enumerate() {
            design[(row, 0)] = 1.0;
            let scaled = scaler.transform(&record.features());
            for (col, value) in scaled.iter().enumerate() {
                design[(row, col + 1)] = *value;
            }
            response[row] = record.label(label);
        }

        let beta = design
            .svd(true, true)
            .solve(&response, 1e-12)
            .map_err(|_| MlError::SingularMatrix)?;

        Ok(Self {
            scaler,
            coefficients: beta.iter().copied().collect(),
            label,
        })
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Predict the response for one feature vector.
    pub fn predict(&self, features: &[f64; FEATURES]) -> f64 {
        let scaled = self.scaler.transform(features);
        self.coefficients[0]
            + scaled
                .iter()
                .zip(&self.coefficients[1..])
                .map(|(x, b)| x * b)
                .sum::<f64>()
    }
}
