//! Regression evaluation metrics

use super::data::LineDataset;
use super::linear::LinearModel;

/// Held-out evaluation results.
#[derive(Debug, Clone, Copy)]
pub struct RegressionMetrics {
    /// Root mean squared error.
    pub rmse: f64,
    /// Coefficient of determination, 1 - SSE/SST.
    pub r_squared: f64,
}

/// Evaluate a fitted model on a test set.
///
/// R² is reported as NaN for an empty or zero-variance test set rather than
/// inventing a value.
pub fn evaluate(model: &LinearModel, test: &LineDataset) -> RegressionMetrics {
    let n = test.len() as f64;
    if test.is_empty() {
        return RegressionMetrics {
            rmse: f64::NAN,
            r_squared: f64::NAN,
        };
    }

    let label = model.label();
    let mean_actual =
        test.records.iter().map(|r| r.label(label)).sum::<f64>() / n;

    let mut sse = 0.0;
    let mut sst = 0.0;
    for record in &test.records {
        let actual = record.label(label);
        let predicted = model.predict(&record.features());
        sse += (actual - predicted).powi(2);
        sst += (actual - mean_actual).powi(2);
    }

    RegressionMetrics {
        rmse: (sse / n).sqrt(),
        r_squared: if sst > 0.0 { 1.0 - sse / sst } else { f64::NAN },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::data::{Label, LineRecord};

    fn linear_dataset(n: usize, noise: impl Fn(usize) -> f64) -> LineDataset {
        let records = (0..n)
            .map(|i| {
                let solder = 280.0 + i as f64;
                LineRecord {
                    soldering_temperature: solder,
                    placement_speed: 40.0 + (i % 7) as f64,
                    ambient_temperature: 20.0 + (i % 5) as f64,
                    material_quality: 0.7 + 0.01 * (i % 10) as f64,
                    humidity: 40.0 + (i % 11) as f64,
                    number_of_defects: 2.0 + 0.05 * solder + noise(i),
                    cycle_time: 1.0,
                }
            })
            .collect();
        LineDataset { records }
    }

    #[test]
    fn test_perfect_fit_scores_zero_rmse_and_unit_r_squared() {
        let data = linear_dataset(60, |_| 0.0);
        let (train, test) = data.split(0.25, 3);
        let model = LinearModel::fit(&train, Label::NumberOfDefects).unwrap();
        let metrics = evaluate(&model, &test);
        assert!(metrics.rmse < 1e-8);
        assert!(metrics.r_squared > 1.0 - 1e-10);
    }

    #[test]
    fn test_noisy_fit_scores_sensibly() {
        // Deterministic pseudo-noise, small relative to the signal range.
        let data =
            linear_dataset(200, |i| 0.2 * ((i as u64 * 2654435761) % 100) as f64 / 100.0 - 0.1);
        let (train, test) = data.split(0.2, 5);
        let model = LinearModel::fit(&train, Label::NumberOfDefects).unwrap();
        let metrics = evaluate(&model, &test);
        assert!(metrics.rmse > 0.0);
        assert!(metrics.rmse < 0.2);
        assert!(metrics.r_squared > 0.95);
    }

    #[test]
    fn test_empty_test_set_reports_nan() {
        let data = linear_dataset(10, |_| 0.0);
        let model = LinearModel::fit(&data, Label::NumberOfDefects).unwrap();
        let metrics = evaluate(&model, &LineDataset::default());
        assert!(metrics.rmse.is_nan());
        assert!(metrics.r_squared.is_nan());
    }
}
