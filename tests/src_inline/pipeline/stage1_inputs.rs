use super::*;
use crate::input::Pollutant;

#[test]
fn test_stage1_passes_valid_reading() {
    let raw = PollutantReading::new(10.0, 20.0, 30.0, 40.0, 1.0, 50.0);
    let prepared = run_stage1(&raw).unwrap();
    assert_eq!(prepared.reading, raw);
    assert!(prepared.clamps.is_empty());
    assert_eq!(prepared.features(), [10.0, 20.0, 30.0, 40.0, 1.0, 50.0]);
}

#[test]
fn test_stage1_clamps_to_field_range() {
    let raw = PollutantReading::new(10.0, 20.0, 30.0, 40.0, 35.0, -1.0);
    let prepared = run_stage1(&raw).unwrap();
    assert_eq!(prepared.reading.get(Pollutant::Co), 20.0);
    assert_eq!(prepared.reading.get(Pollutant::O3), 0.0);
    assert_eq!(prepared.clamps[0].requested, 35.0);
    assert_eq!(prepared.clamps.len(), 2);
}

#[test]
fn test_stage1_rejects_nan() {
    let raw = PollutantReading::new(f64::NAN, 20.0, 30.0, 40.0, 1.0, 50.0);
    assert!(matches!(
        run_stage1(&raw),
        Err(InputError::NonFinite {
            pollutant: Pollutant::Pm25,
            ..
        })
    ));
}

#[test]
fn test_stage1_batch_stops_on_first_error() {
    let rows = vec![
        PollutantReading::default(),
        PollutantReading::new(1.0, 2.0, 3.0, 4.0, f64::INFINITY, 6.0),
    ];
    assert!(run_stage1_batch(&rows).is_err());
    assert_eq!(run_stage1_batch(&rows[..1]).unwrap().len(), 1);
}
