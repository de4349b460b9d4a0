use std::path::PathBuf;

use crate::input::N_POLLUTANTS;
use crate::model::category::{AqiCategory, classify};

pub mod artifact;
pub mod category;
pub mod regressor;
pub mod scaler;

/// Raw or scaled features in `Pollutant::ALL` order.
pub type FeatureVector = [f64; N_POLLUTANTS];

/// Normalizes raw feature rows before inference.
pub trait FeatureScaler {
    fn transform(&self, rows: &[FeatureVector]) -> Vec<FeatureVector>;

    fn kind(&self) -> &'static str;
}

/// Maps scaled feature rows to one AQI value per row.
pub trait AqiRegressor {
    fn predict(&self, rows: &[FeatureVector]) -> Vec<f64>;

    fn kind(&self) -> &'static str;
}

/// Loaded once at startup and only borrowed afterwards.
pub struct ModelBundle {
    pub scaler: Box<dyn FeatureScaler>,
    pub regressor: Box<dyn AqiRegressor>,
    pub scaler_path: Option<PathBuf>,
    pub model_path: Option<PathBuf>,
}

impl ModelBundle {
    pub fn new(scaler: Box<dyn FeatureScaler>, regressor: Box<dyn AqiRegressor>) -> Self {
        Self {
            scaler,
            regressor,
            scaler_path: None,
            model_path: None,
        }
    }
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("scaler", &self.scaler.kind())
            .field("regressor", &self.regressor.kind())
            .field("scaler_path", &self.scaler_path)
            .field("model_path", &self.model_path)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiPrediction {
    pub value: f64,
    pub category: AqiCategory,
}

impl AqiPrediction {
    pub fn from_value(value: f64) -> Self {
        Self {
            value,
            category: classify(value),
        }
    }

    /// Two-decimal rendering used on screen; reports keep `value` as is.
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.value)
    }
}
