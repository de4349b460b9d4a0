use crate::input::{ClampEvent, InputError, PollutantReading};
use crate::model::FeatureVector;

#[derive(Debug, Clone, PartialEq)]
pub struct PreparedReading {
    pub reading: PollutantReading,
    pub clamps: Vec<ClampEvent>,
}

impl PreparedReading {
    pub fn features(&self) -> FeatureVector {
        self.reading.values()
    }
}

/// Rejects non-finite values, then pins each value into its range the way
/// the bounded input fields do.
pub fn run_stage1(requested: &PollutantReading) -> Result<PreparedReading, InputError> {
    requested.validate()?;
    let (reading, clamps) = requested.clamped();
    for c in &clamps {
        tracing::warn!(
            pollutant = c.pollutant.name(),
            requested = c.requested,
            applied = c.applied,
            "input outside accepted range; clamped"
        );
    }
    Ok(PreparedReading {
        reading,
        clamps,
    })
}

pub fn run_stage1_batch(requested: &[PollutantReading]) -> Result<Vec<PreparedReading>, InputError> {
    requested.iter().map(run_stage1).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_inputs.rs"]
mod tests;
