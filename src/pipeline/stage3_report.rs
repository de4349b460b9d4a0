use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::input::PollutantReading;
use crate::model::{AqiPrediction, ModelBundle};
use crate::pipeline::stage1_inputs::PreparedReading;
use crate::report::json::render_summary_json;
use crate::report::svg::{render_gauge_svg, render_radar_svg};
use crate::report::table::{write_batch_csv, write_report_csv};
use crate::report::text::render_report_text;
use crate::report::{
    BATCH_FILE_NAME, GAUGE_FILE_NAME, RADAR_FILE_NAME, REPORT_FILE_NAME, ReportContext,
    ReportError, SUMMARY_FILE_NAME, TEXT_FILE_NAME, assemble_report,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub charts: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { charts: true }
    }
}

#[derive(Debug, Clone)]
pub struct Stage3Input<'a> {
    pub prepared: &'a PreparedReading,
    pub prediction: &'a AqiPrediction,
    pub bundle: &'a ModelBundle,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn build_report_context(input: &Stage3Input<'_>) -> ReportContext {
    ReportContext {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        reading: input.prepared.reading,
        clamps: input.prepared.clamps.clone(),
        prediction: *input.prediction,
        scaler_kind: input.bundle.scaler.kind().to_string(),
        model_kind: input.bundle.regressor.kind().to_string(),
        scaler_path: input
            .bundle
            .scaler_path
            .as_ref()
            .map(|p| p.display().to_string()),
        model_path: input
            .bundle
            .model_path
            .as_ref()
            .map(|p| p.display().to_string()),
    }
}

/// Writes every per-request artifact into `out_dir` and returns the paths
/// in write order.
pub fn write_reports(
    input: &Stage3Input<'_>,
    out_dir: &Path,
    options: ReportOptions,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    let rows = assemble_report(&input.prepared.reading, input.prediction);
    let csv_path = out_dir.join(REPORT_FILE_NAME);
    write_report_csv(&rows, BufWriter::new(File::create(&csv_path)?))?;
    written.push(csv_path);

    let ctx = build_report_context(input);

    let summary_path = out_dir.join(SUMMARY_FILE_NAME);
    write_text(&summary_path, &render_summary_json(&ctx)?)?;
    written.push(summary_path);

    let text_path = out_dir.join(TEXT_FILE_NAME);
    write_text(&text_path, &render_report_text(&ctx))?;
    written.push(text_path);

    if options.charts {
        let gauge_path = out_dir.join(GAUGE_FILE_NAME);
        write_text(&gauge_path, &render_gauge_svg(input.prediction))?;
        written.push(gauge_path);

        let radar_path = out_dir.join(RADAR_FILE_NAME);
        write_text(&radar_path, &render_radar_svg(&input.prepared.reading))?;
        written.push(radar_path);
    }

    for path in &written {
        tracing::info!(path = %path.display(), "wrote report file");
    }
    Ok(written)
}

pub fn write_batch_report(
    prepared: &[PreparedReading],
    predictions: &[AqiPrediction],
    out_dir: &Path,
) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(out_dir)?;
    let readings: Vec<PollutantReading> = prepared.iter().map(|p| p.reading).collect();
    let path = out_dir.join(BATCH_FILE_NAME);
    write_batch_csv(&readings, predictions, BufWriter::new(File::create(&path)?))?;
    tracing::info!(rows = readings.len(), path = %path.display(), "wrote batch predictions");
    Ok(path)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
