use serde::Deserialize;

use crate::input::N_POLLUTANTS;
use crate::model::{FeatureScaler, FeatureVector};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// `(x - mean) / scale`, zero scale treated as one.
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`.
    MinMax { min: Vec<f64>, scale: Vec<f64> },
    Identity,
}

impl Scaler {
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Scaler::Standard { mean, scale } => {
                check_params("mean", mean)?;
                check_params("scale", scale)
            }
            Scaler::MinMax { min, scale } => {
                check_params("min", min)?;
                check_params("scale", scale)
            }
            Scaler::Identity => Ok(()),
        }
    }

    fn transform_row(&self, row: &FeatureVector) -> FeatureVector {
        let mut out = *row;
        match self {
            Scaler::Standard { mean, scale } => {
                for (i, v) in out.iter_mut().enumerate() {
                    let s = if scale[i] == 0.0 { 1.0 } else { scale[i] };
                    *v = (*v - mean[i]) / s;
                }
            }
            Scaler::MinMax { min, scale } => {
                for (i, v) in out.iter_mut().enumerate() {
                    *v = *v * scale[i] + min[i];
                }
            }
            Scaler::Identity => {}
        }
        out
    }
}

impl FeatureScaler for Scaler {
    fn transform(&self, rows: &[FeatureVector]) -> Vec<FeatureVector> {
        rows.iter().map(|row| self.transform_row(row)).collect()
    }

    fn kind(&self) -> &'static str {
        match self {
            Scaler::Standard { .. } => "standard",
            Scaler::MinMax { .. } => "min_max",
            Scaler::Identity => "identity",
        }
    }
}

fn check_params(field: &str, values: &[f64]) -> Result<(), String> {
    if values.len() != N_POLLUTANTS {
        return Err(format!(
            "scaler {} has {} entries, expected {}",
            field,
            values.len(),
            N_POLLUTANTS
        ));
    }
    if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
        return Err(format!("scaler {}[{}] is not finite", field, idx));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scaler.rs"]
mod tests;
