use crate::input::InputError;
use crate::model::artifact::ArtifactError;
use crate::pipeline::stage2_predict::PredictError;
use crate::report::ReportError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("cannot load model artifacts: {0}")]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("prediction failed: {0}")]
    Predict(#[from] PredictError),
    #[error("cannot write report: {0}")]
    Report(#[from] ReportError),
}
