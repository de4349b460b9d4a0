use super::*;

#[test]
fn test_assemble_report_order_and_values() {
    let reading = PollutantReading::new(10.0, 20.0, 30.0, 40.0, 1.0, 50.0);
    let prediction = AqiPrediction::from_value(75.5);
    let rows = assemble_report(&reading, &prediction);

    assert_eq!(rows.len(), 8);
    let names: Vec<&str> = rows.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec!["PM2.5", "PM10", "NO2", "SO2", "CO", "O3", "AQI", "Category"]
    );
    let values: Vec<String> = rows.iter().map(|r| r.value.to_string()).collect();
    assert_eq!(
        values,
        vec!["10", "20", "30", "40", "1", "50", "75.5", "Satisfactory"]
    );
}

#[test]
fn test_assemble_report_keeps_unrounded_aqi() {
    let reading = PollutantReading::default();
    let prediction = AqiPrediction::from_value(123.456789);
    let rows = assemble_report(&reading, &prediction);
    assert_eq!(rows[6].value, ReportValue::Number(123.456789));
    assert_eq!(rows[7].value, ReportValue::Text("Moderate".to_string()));
    assert_eq!(prediction.display_value(), "123.46");
}

#[test]
fn test_assemble_report_always_eight_rows() {
    for v in [-5.0, 0.0, 50.0, 401.0, 1.0e6] {
        let rows = assemble_report(&PollutantReading::default(), &AqiPrediction::from_value(v));
        assert_eq!(rows.len(), 8);
    }
}

#[test]
fn test_format_f64_2() {
    assert_eq!(format_f64_2(75.5), "75.50");
    assert_eq!(format_f64_2(0.004), "0.00");
}
