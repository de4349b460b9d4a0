use crate::model::{AqiPrediction, FeatureVector, ModelBundle};
use crate::pipeline::stage1_inputs::PreparedReading;

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("model returned {got} predictions for {expected} rows")]
    LengthMismatch { expected: usize, got: usize },
    #[error("model produced a non-finite AQI ({value}) for row {row}")]
    NonFinite { row: usize, value: f64 },
}

/// raw features -> scaler.transform -> regressor.predict -> classify.
pub fn run_stage2(
    bundle: &ModelBundle,
    prepared: &[PreparedReading],
) -> Result<Vec<AqiPrediction>, PredictError> {
    let raw: Vec<FeatureVector> = prepared.iter().map(PreparedReading::features).collect();
    let scaled = bundle.scaler.transform(&raw);
    let values = bundle.regressor.predict(&scaled);
    if values.len() != raw.len() {
        return Err(PredictError::LengthMismatch {
            expected: raw.len(),
            got: values.len(),
        });
    }

    let mut out = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        if !value.is_finite() {
            return Err(PredictError::NonFinite { row, value });
        }
        let prediction = AqiPrediction::from_value(value);
        tracing::debug!(
            row,
            aqi = prediction.value,
            category = prediction.category.label(),
            "predicted"
        );
        out.push(prediction);
    }
    Ok(out)
}

/// Single-request form; the model sees a batch of one.
pub fn predict_one(
    bundle: &ModelBundle,
    prepared: &PreparedReading,
) -> Result<AqiPrediction, PredictError> {
    let mut predictions = run_stage2(bundle, std::slice::from_ref(prepared))?;
    predictions.pop().ok_or(PredictError::LengthMismatch {
        expected: 1,
        got: 0,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_predict.rs"]
mod tests;
