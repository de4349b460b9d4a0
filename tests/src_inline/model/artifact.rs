use super::*;
use std::fs;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::model::FeatureVector;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("aqi_artifact_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

const SCALER_JSON: &str = r#"{"kind":"standard","mean":[0,0,0,0,0,0],"scale":[1,1,1,1,1,1]}"#;
const MODEL_JSON: &str =
    r#"{"kind":"linear","coefficients":[1,1,0,0,0,0],"intercept":0.5}"#;

#[test]
fn test_load_bundle_plain_json() {
    let dir = make_temp_dir();
    fs::write(dir.join("scaler.json"), SCALER_JSON).unwrap();
    fs::write(dir.join("aqi_model.json"), MODEL_JSON).unwrap();

    let bundle = load_bundle(&dir.join("aqi_model.json"), &dir.join("scaler.json")).unwrap();
    assert_eq!(bundle.scaler.kind(), "standard");
    assert_eq!(bundle.regressor.kind(), "linear");
    assert_eq!(bundle.model_path, Some(dir.join("aqi_model.json")));

    let row: FeatureVector = [10.0, 20.0, 0.0, 0.0, 0.0, 0.0];
    let scaled = bundle.scaler.transform(&[row]);
    assert_eq!(bundle.regressor.predict(&scaled), vec![30.5]);
}

#[test]
fn test_load_gz_artifact() {
    let dir = make_temp_dir();
    let path = dir.join("aqi_model.json.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(MODEL_JSON.as_bytes()).unwrap();
    fs::write(&path, enc.finish().unwrap()).unwrap();

    let model = load_regressor(&path).unwrap();
    assert_eq!(model.kind(), "linear");
}

#[test]
fn test_missing_artifact_is_io_error() {
    let dir = make_temp_dir();
    let err = load_scaler(&dir.join("scaler.json")).unwrap_err();
    assert!(matches!(err, ArtifactError::Io { .. }));
    assert!(err.to_string().contains("scaler.json"));
}

#[test]
fn test_unparsable_artifact_is_json_error() {
    let dir = make_temp_dir();
    let path = dir.join("aqi_model.json");
    fs::write(&path, b"\x80\x03cnumpy pickle").unwrap();
    assert!(matches!(
        load_regressor(&path),
        Err(ArtifactError::Json { .. })
    ));

    fs::write(&path, r#"{"kind":"svm"}"#).unwrap();
    assert!(matches!(
        load_regressor(&path),
        Err(ArtifactError::Json { .. })
    ));
}

#[test]
fn test_incompatible_feature_count() {
    let dir = make_temp_dir();
    let path = dir.join("scaler.json");
    fs::write(
        &path,
        r#"{"kind":"standard","mean":[0,0,0,0],"scale":[1,1,1,1]}"#,
    )
    .unwrap();
    match load_scaler(&path) {
        Err(ArtifactError::Incompatible { reason, .. }) => assert!(reason.contains("4 entries")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_bundle_fails_if_either_artifact_fails() {
    let dir = make_temp_dir();
    fs::write(dir.join("scaler.json"), SCALER_JSON).unwrap();
    assert!(load_bundle(&dir.join("aqi_model.json"), &dir.join("scaler.json")).is_err());
}
