use super::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("aqi_batch_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_load_batch_any_column_order() {
    let dir = make_temp_dir();
    let path = dir.join("readings.csv");
    fs::write(
        &path,
        "station,O3,CO,SO2,NO2,PM10,PM2.5\nA,50,1,40,30,20,10\nB,5,0.5,4,3,2,1\n",
    )
    .unwrap();

    let rows = load_batch(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].values(), [10.0, 20.0, 30.0, 40.0, 1.0, 50.0]);
    assert_eq!(rows[1].values(), [1.0, 2.0, 3.0, 4.0, 0.5, 5.0]);
}

#[test]
fn test_load_batch_gz() {
    let dir = make_temp_dir();
    let path = dir.join("readings.csv.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(b"pm25,pm10,no2,so2,co,o3\n10,20,30,40,1,50\n")
        .unwrap();
    fs::write(&path, enc.finish().unwrap()).unwrap();

    let rows = load_batch(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(Pollutant::O3), 50.0);
}

#[test]
fn test_load_batch_missing_column() {
    let dir = make_temp_dir();
    let path = dir.join("readings.csv");
    fs::write(&path, "PM2.5,PM10,NO2,SO2,CO\n1,2,3,4,5\n").unwrap();

    match load_batch(&path) {
        Err(InputError::MissingInput(msg)) => assert!(msg.contains("O3")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_load_batch_bad_number_reports_line() {
    let dir = make_temp_dir();
    let path = dir.join("readings.csv");
    fs::write(
        &path,
        "PM2.5,PM10,NO2,SO2,CO,O3\n1,2,3,4,5,6\n1,2,x,4,5,6\n",
    )
    .unwrap();

    match load_batch(&path) {
        Err(InputError::Parse(msg)) => {
            assert!(msg.contains("line 3"));
            assert!(msg.contains("NO2"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_load_batch_missing_file() {
    let dir = make_temp_dir();
    assert!(matches!(
        load_batch(&dir.join("nope.csv")),
        Err(InputError::Io(_))
    ));
}

#[test]
fn test_load_batch_concatenated_gz_members() {
    let dir = make_temp_dir();
    let path = dir.join("joined.csv.gz");
    let mut bytes = Vec::new();
    for chunk in [
        &b"PM2.5,PM10,NO2,SO2,CO,O3\n1,2,3,4,5,6\n"[..],
        &b"7,8,9,10,11,12\n"[..],
    ] {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(chunk).unwrap();
        bytes.extend(enc.finish().unwrap());
    }
    fs::write(&path, bytes).unwrap();

    let rows = load_batch(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].values(), [7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
}

#[test]
fn test_load_batch_non_finite_reports_line() {
    let dir = make_temp_dir();
    let path = dir.join("readings.csv");
    fs::write(
        &path,
        "PM2.5,PM10,NO2,SO2,CO,O3\n1,2,3,4,5,6\n1,2,NaN,4,5,6\n1,2,3,4,inf,6\n",
    )
    .unwrap();

    match load_batch(&path) {
        Err(InputError::Parse(msg)) => {
            assert!(msg.contains("line 3"), "{msg}");
            assert!(msg.contains("NO2"), "{msg}");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_load_batch_duplicate_column_keeps_first() {
    let dir = make_temp_dir();
    let path = dir.join("readings.csv");
    fs::write(
        &path,
        "PM2.5,PM10,NO2,SO2,CO,O3,pm25\n1,2,3,4,5,6,99\n",
    )
    .unwrap();

    let rows = load_batch(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(Pollutant::Pm25), 1.0);
}
