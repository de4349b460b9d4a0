use serde::Serialize;

use crate::input::{ClampEvent, Pollutant};
use crate::model::category::{AqiCategory, ColorTag};
use crate::report::{ReportContext, format_f64_2};

#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: ToolMeta<'a>,
    inputs: Vec<InputEntry>,
    clamped: &'a [ClampEvent],
    prediction: PredictionSummary,
    model: ModelMeta<'a>,
}

#[derive(Debug, Serialize)]
struct InputEntry {
    pollutant: Pollutant,
    value: f64,
}

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct PredictionSummary {
    aqi: f64,
    aqi_display: String,
    category: AqiCategory,
    color: ColorTag,
}

#[derive(Debug, Serialize)]
struct ModelMeta<'a> {
    scaler: &'a str,
    scaler_path: Option<&'a str>,
    regressor: &'a str,
    regressor_path: Option<&'a str>,
}

pub fn render_summary_json(ctx: &ReportContext) -> Result<String, serde_json::Error> {
    let inputs = ctx
        .reading
        .iter()
        .map(|(pollutant, value)| InputEntry { pollutant, value })
        .collect();

    let summary = Summary {
        tool: ToolMeta {
            name: &ctx.tool_name,
            version: &ctx.tool_version,
        },
        inputs,
        clamped: &ctx.clamps,
        prediction: PredictionSummary {
            aqi: ctx.prediction.value,
            aqi_display: format_f64_2(ctx.prediction.value),
            category: ctx.prediction.category,
            color: ctx.prediction.category.color(),
        },
        model: ModelMeta {
            scaler: &ctx.scaler_kind,
            scaler_path: ctx.scaler_path.as_deref(),
            regressor: &ctx.model_kind,
            regressor_path: ctx.model_path.as_deref(),
        },
    };

    serde_json::to_string_pretty(&summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
