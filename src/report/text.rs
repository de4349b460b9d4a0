use crate::input::Pollutant;
use crate::model::category::{ColorTag, GAUGE_MAX, GAUGE_MIN, gauge_bands};
use crate::report::{ReportContext, format_f64_2};

const GAUGE_WIDTH: usize = 50;

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("Air Quality Index Prediction Report\n");
    out.push_str("===================================\n\n");

    out.push_str("1. Prediction\n");
    out.push_str(&format!(
        "Predicted AQI: {}\n",
        ctx.prediction.display_value()
    ));
    out.push_str(&format!(
        "Category: {} {}\n",
        ctx.prediction.category.label(),
        ctx.prediction.category.emoji()
    ));
    out.push_str(&format!("Gauge color: {}\n\n", ctx.prediction.category.color()));

    out.push_str("2. AQI gauge\n");
    out.push_str(&render_text_gauge(ctx.prediction.value));
    out.push('\n');

    out.push_str("3. Pollutant levels\n");
    for pollutant in Pollutant::ALL {
        let (min, max) = pollutant.range();
        out.push_str(&format!(
            "{:<6} {:>10}   range [{}, {}]\n",
            pollutant.name(),
            format_f64_2(ctx.reading.get(pollutant)),
            min,
            max
        ));
    }
    out.push('\n');

    if !ctx.clamps.is_empty() {
        out.push_str("4. Input adjustments\n");
        for c in &ctx.clamps {
            out.push_str(&format!(
                "{} requested {} was clamped to {}\n",
                c.pollutant, c.requested, c.applied
            ));
        }
        out.push('\n');
    }

    out.push_str("Model\n");
    out.push_str(&format!(
        "Scaler: {}{}\n",
        ctx.scaler_kind,
        path_suffix(ctx.scaler_path.as_deref())
    ));
    out.push_str(&format!(
        "Regressor: {}{}\n",
        ctx.model_kind,
        path_suffix(ctx.model_path.as_deref())
    ));
    out.push_str(&format!("Tool: {} {}\n", ctx.tool_name, ctx.tool_version));

    out
}

/// One character per 10 AQI units. Band letters mark the colored steps,
/// `#` marks the filled part up to the value.
pub fn render_text_gauge(value: f64) -> String {
    let span = GAUGE_MAX - GAUGE_MIN;
    let filled = if value.is_nan() {
        0
    } else {
        let frac = ((value - GAUGE_MIN) / span).clamp(0.0, 1.0);
        (frac * GAUGE_WIDTH as f64).round() as usize
    };

    let mut scale = String::with_capacity(GAUGE_WIDTH);
    for i in 0..GAUGE_WIDTH {
        let mid = GAUGE_MIN + span * (i as f64 + 0.5) / GAUGE_WIDTH as f64;
        let letter = gauge_bands()
            .iter()
            .find(|b| mid >= b.start && mid < b.end)
            .map(|b| band_letter(b.category.color()))
            .unwrap_or('?');
        scale.push(letter);
    }

    let mut bar = String::with_capacity(GAUGE_WIDTH);
    for i in 0..GAUGE_WIDTH {
        bar.push(if i < filled { '#' } else { '.' });
    }

    format!(
        "[{}] {}..{}\n[{}] {}\n",
        scale,
        GAUGE_MIN,
        GAUGE_MAX,
        bar,
        format_f64_2(value)
    )
}

fn band_letter(color: ColorTag) -> char {
    match color {
        ColorTag::Green => 'G',
        ColorTag::Yellow => 'Y',
        ColorTag::Orange => 'O',
        ColorTag::Red => 'R',
        ColorTag::Purple => 'P',
        ColorTag::Brown => 'B',
    }
}

fn path_suffix(path: Option<&str>) -> String {
    match path {
        Some(p) => format!(" ({})", p),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
