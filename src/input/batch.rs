use std::path::Path;

use crate::input::source::open_maybe_gz;
use crate::input::{InputError, N_POLLUTANTS, Pollutant, PollutantReading};

/// Reads one `PollutantReading` per CSV row. The header must name all six
/// pollutants; order is free and unknown columns are skipped.
pub fn load_batch(path: &Path) -> Result<Vec<PollutantReading>, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut columns: [Option<usize>; N_POLLUTANTS] = [None; N_POLLUTANTS];
    for (idx, name) in headers.iter().enumerate() {
        match Pollutant::from_header(name) {
            Some(p) if columns[p.index()].is_none() => columns[p.index()] = Some(idx),
            Some(p) => {
                tracing::warn!(
                    column = idx,
                    pollutant = p.name(),
                    "duplicate pollutant column ignored"
                );
            }
            None => {
                tracing::debug!(column = name, "ignoring non-pollutant column");
            }
        }
    }

    let mut missing = Vec::new();
    for p in Pollutant::ALL {
        if columns[p.index()].is_none() {
            missing.push(p.name());
        }
    }
    if !missing.is_empty() {
        return Err(InputError::MissingInput(format!(
            "{} lacks column(s): {}",
            path.display(),
            missing.join(", ")
        )));
    }

    let mut readings = Vec::new();
    for (row_idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        // header is line 1
        let line_no = row_idx + 2;
        let mut values = [0.0f64; N_POLLUTANTS];
        for p in Pollutant::ALL {
            let col = columns[p.index()].unwrap_or_default();
            let raw = record.get(col).unwrap_or("");
            let value = raw.parse::<f64>().map_err(|_| {
                InputError::Parse(format!(
                    "line {}: {} value {:?} is not a number",
                    line_no,
                    p.name(),
                    raw
                ))
            })?;
            if !value.is_finite() {
                return Err(InputError::Parse(format!(
                    "line {}: {} value {:?} is not finite",
                    line_no,
                    p.name(),
                    raw
                )));
            }
            values[p.index()] = value;
        }
        readings.push(PollutantReading::from_values(values));
    }

    tracing::info!(rows = readings.len(), path = %path.display(), "loaded batch readings");
    Ok(readings)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/batch.rs"]
mod tests;
