//! Regression metrics.

use serde::{Deserialize, Serialize};

/// Errors from performance evaluation
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PerformanceError {
    #[error("Predictions ({predictions}) and actuals ({actuals}) differ in length")]
    LengthMismatch { predictions: usize, actuals: usize },

    #[error("No prediction/actual pairs to evaluate")]
    Empty,

    #[error("Predictions and actuals must be finite")]
    NonFinite,
}

/// RMSE, MAE and coefficient of determination over paired samples
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
}

/// Compute regression metrics over `(prediction, actual)` pairs.
///
/// When the actuals have zero variance R² is 1 for a perfect fit and 0
/// otherwise.
pub fn regression_metrics(
    predictions: &[f64],
    actuals: &[f64],
) -> Result<RegressionMetrics, PerformanceError> {
    if predictions.len() != actuals.len() {
        return Err(PerformanceError::LengthMismatch {
            predictions: predictions.len(),
            actuals: actuals.len(),
        });
    }
    if predictions.is_empty() {
        return Err(PerformanceError::Empty);
    }
    if predictions.iter().chain(actuals).any(|v| !v.is_finite()) {
        return Err(PerformanceError::NonFinite);
    }

    let n = predictions.len() as f64;
    let mean_actual = actuals.iter().sum::<f64>() / n;

    let mut ss_res = 0.0;
    let mut abs_err = 0.0;
    let mut ss_tot = 0.0;
    for (&p, &a) in predictions.iter().zip(actuals) {
        let err = a - p;
        ss_res += err * err;
        abs_err += err.abs();
        ss_tot += (a - mean_actual).powi(2);
    }

    let r2 = if ss_tot == 0.0 {
        if ss_res == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(RegressionMetrics { rmse: (ss_res / n).sqrt(), mae: abs_err / n, r2 })
}
