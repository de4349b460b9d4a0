use std::fmt;

use crate::input::{ClampEvent, Pollutant, PollutantReading};
use crate::model::AqiPrediction;

pub mod json;
pub mod svg;
pub mod table;
pub mod text;

pub const REPORT_FILE_NAME: &str = "aqi_prediction_report.csv";
pub const BATCH_FILE_NAME: &str = "aqi_batch_predictions.csv";
pub const SUMMARY_FILE_NAME: &str = "summary.json";
pub const TEXT_FILE_NAME: &str = "report.txt";
pub const GAUGE_FILE_NAME: &str = "aqi_gauge.svg";
pub const RADAR_FILE_NAME: &str = "pollutant_radar.svg";

pub const AQI_ROW: &str = "AQI";
pub const CATEGORY_ROW: &str = "Category";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Number(v) => write!(f, "{}", v),
            ReportValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: &'static str,
    pub value: ReportValue,
}

/// Six pollutant rows in fixed order, then the unrounded AQI, then the
/// plain category label. Always eight rows.
pub fn assemble_report(reading: &PollutantReading, prediction: &AqiPrediction) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(Pollutant::ALL.len() + 2);
    for (pollutant, value) in reading.iter() {
        rows.push(ReportRow {
            name: pollutant.name(),
            value: ReportValue::Number(value),
        });
    }
    rows.push(ReportRow {
        name: AQI_ROW,
        value: ReportValue::Number(prediction.value),
    });
    rows.push(ReportRow {
        name: CATEGORY_ROW,
        value: ReportValue::Text(prediction.category.label().to_string()),
    });
    rows
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub tool_name: String,
    pub tool_version: String,
    pub reading: PollutantReading,
    pub clamps: Vec<ClampEvent>,
    pub prediction: AqiPrediction,
    pub scaler_kind: String,
    pub model_kind: String,
    pub scaler_path: Option<String>,
    pub model_path: Option<String>,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
