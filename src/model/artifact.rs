use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::input::source::open_maybe_gz;
use crate::model::regressor::Regressor;
use crate::model::scaler::Scaler;
use crate::model::{AqiRegressor, FeatureScaler, ModelBundle};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("cannot read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse artifact {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("incompatible artifact {path}: {reason}")]
    Incompatible { path: PathBuf, reason: String },
}

pub fn load_scaler(path: &Path) -> Result<Scaler, ArtifactError> {
    let scaler: Scaler = read_json(path)?;
    scaler
        .validate()
        .map_err(|reason| ArtifactError::Incompatible {
            path: path.to_path_buf(),
            reason,
        })?;
    tracing::info!(kind = scaler.kind(), path = %path.display(), "loaded scaler");
    Ok(scaler)
}

pub fn load_regressor(path: &Path) -> Result<Regressor, ArtifactError> {
    let regressor: Regressor = read_json(path)?;
    regressor
        .validate()
        .map_err(|reason| ArtifactError::Incompatible {
            path: path.to_path_buf(),
            reason,
        })?;
    tracing::info!(kind = regressor.kind(), path = %path.display(), "loaded model");
    Ok(regressor)
}

/// Loads both artifacts; either one failing aborts the whole load.
pub fn load_bundle(model_path: &Path, scaler_path: &Path) -> Result<ModelBundle, ArtifactError> {
    let scaler = load_scaler(scaler_path)?;
    let regressor = load_regressor(model_path)?;
    let mut bundle = ModelBundle::new(Box::new(scaler), Box::new(regressor));
    bundle.scaler_path = Some(scaler_path.to_path_buf());
    bundle.model_path = Some(model_path.to_path_buf());
    Ok(bundle)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let reader = open_maybe_gz(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(reader).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/artifact.rs"]
mod tests;
