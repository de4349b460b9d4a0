use std::io::Write;

use crate::input::{Pollutant, PollutantReading};
use crate::model::AqiPrediction;
use crate::report::{AQI_ROW, CATEGORY_ROW, ReportError, ReportRow};

pub const REPORT_HEADER: [&str; 2] = ["Pollutant", "Value"];

pub fn write_report_csv<W: Write>(rows: &[ReportRow], w: W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(REPORT_HEADER)?;
    for row in rows {
        writer.write_record([row.name.to_string(), row.value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// One row per request, pollutant columns first, input order kept.
pub fn write_batch_csv<W: Write>(
    readings: &[PollutantReading],
    predictions: &[AqiPrediction],
    w: W,
) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(w);
    let mut header: Vec<&str> = Pollutant::ALL.iter().map(|p| p.name()).collect();
    header.push(AQI_ROW);
    header.push(CATEGORY_ROW);
    writer.write_record(&header)?;

    for (reading, prediction) in readings.iter().zip(predictions) {
        let mut record: Vec<String> = reading.values().iter().map(|v| v.to_string()).collect();
        record.push(prediction.value.to_string());
        record.push(prediction.category.label().to_string());
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
