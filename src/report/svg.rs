use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::input::{Pollutant, PollutantReading};
use crate::model::AqiPrediction;
use crate::model::category::{GAUGE_MAX, GAUGE_MIN, gauge_bands};

const GAUGE_WIDTH: f64 = 420.0;
const GAUGE_HEIGHT: f64 = 280.0;
const GAUGE_RADIUS: f64 = 160.0;
const GAUGE_BAND_STROKE: f64 = 36.0;
const GAUGE_BAR_STROKE: f64 = 14.0;

const RADAR_SIZE: f64 = 480.0;
const RADAR_RADIUS: f64 = 180.0;
const RADAR_RINGS: usize = 4;
const RADAR_HEADROOM: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarPoint {
    pub pollutant: Pollutant,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Radial axis upper bound: 20% headroom over the largest value, or 1
/// when there is nothing to scale against.
pub fn radar_range(reading: &PollutantReading) -> f64 {
    let max = reading.values().iter().copied().fold(0.0f64, f64::max);
    if max > 0.0 { max * RADAR_HEADROOM } else { 1.0 }
}

/// One vertex per pollutant, clockwise from the top.
pub fn radar_points(reading: &PollutantReading) -> Vec<RadarPoint> {
    let range = radar_range(reading);
    let center = RADAR_SIZE / 2.0;
    reading
        .iter()
        .map(|(pollutant, value)| {
            let angle = radar_angle(pollutant.index());
            let r = RADAR_RADIUS * (value / range);
            RadarPoint {
                pollutant,
                value,
                x: center + r * angle.cos(),
                y: center + r * angle.sin(),
            }
        })
        .collect()
}

fn radar_angle(idx: usize) -> f64 {
    -PI / 2.0 + idx as f64 * 2.0 * PI / Pollutant::ALL.len() as f64
}

pub fn render_radar_svg(reading: &PollutantReading) -> String {
    let center = RADAR_SIZE / 2.0;
    let range = radar_range(reading);
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{:.0}' height='{:.0}' viewBox='0 0 {:.0} {:.0}' role='img'>",
        RADAR_SIZE, RADAR_SIZE, RADAR_SIZE, RADAR_SIZE
    );
    let _ = writeln!(
        svg,
        "  <title>Pollutant Levels Radar Chart</title>"
    );
    let _ = writeln!(
        svg,
        "  <rect width='100%' height='100%' fill='white'/>"
    );

    for ring in 1..=RADAR_RINGS {
        let r = RADAR_RADIUS * ring as f64 / RADAR_RINGS as f64;
        let ring_points = (0..Pollutant::ALL.len())
            .map(|i| {
                let a = radar_angle(i);
                format!("{:.2},{:.2}", center + r * a.cos(), center + r * a.sin())
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            svg,
            "  <polygon points='{}' fill='none' stroke='#cccccc' stroke-width='1'/>",
            ring_points
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' font-size='10' fill='#888888'>{}</text>",
            center + 4.0,
            center - r,
            trim_number(range * ring as f64 / RADAR_RINGS as f64)
        );
    }

    for pollutant in Pollutant::ALL {
        let a = radar_angle(pollutant.index());
        let x = center + RADAR_RADIUS * a.cos();
        let y = center + RADAR_RADIUS * a.sin();
        let _ = writeln!(
            svg,
            "  <line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='#cccccc' stroke-width='1'/>",
            center, center, x, y
        );
        let lx = center + (RADAR_RADIUS + 22.0) * a.cos();
        let ly = center + (RADAR_RADIUS + 22.0) * a.sin();
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' font-size='13' text-anchor='middle' dominant-baseline='middle'>{}</text>",
            lx,
            ly,
            pollutant.name()
        );
    }

    let points = radar_points(reading);
    let polygon = points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(
        svg,
        "  <polygon points='{}' fill='#1f77b4' fill-opacity='0.35' stroke='#1f77b4' stroke-width='2'/>",
        polygon
    );
    for p in &points {
        let _ = writeln!(
            svg,
            "  <circle cx='{:.2}' cy='{:.2}' r='3' fill='#1f77b4'><title>{}: {}</title></circle>",
            p.x,
            p.y,
            p.pollutant.name(),
            p.value
        );
    }

    let _ = writeln!(svg, "</svg>");
    svg
}

/// Angle on the half-dial: 0 at the left end, 500 at the right end.
/// Values outside the axis are pinned to its ends.
pub fn gauge_angle(value: f64) -> f64 {
    let span = GAUGE_MAX - GAUGE_MIN;
    let frac = if value.is_nan() {
        0.0
    } else {
        ((value - GAUGE_MIN) / span).clamp(0.0, 1.0)
    };
    PI * (1.0 - frac)
}

fn gauge_point(value: f64, radius: f64) -> (f64, f64) {
    let cx = GAUGE_WIDTH / 2.0;
    let cy = GAUGE_HEIGHT - 60.0;
    let a = gauge_angle(value);
    (cx + radius * a.cos(), cy - radius * a.sin())
}

fn arc_path(from: f64, to: f64, radius: f64) -> String {
    let (x0, y0) = gauge_point(from, radius);
    let (x1, y1) = gauge_point(to, radius);
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 0 1 {:.2} {:.2}",
        x0, y0, radius, radius, x1, y1
    )
}

pub fn render_gauge_svg(prediction: &AqiPrediction) -> String {
    let color = prediction.category.color().name();
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{:.0}' height='{:.0}' viewBox='0 0 {:.0} {:.0}' role='img'>",
        GAUGE_WIDTH, GAUGE_HEIGHT, GAUGE_WIDTH, GAUGE_HEIGHT
    );
    let _ = writeln!(svg, "  <title>AQI Gauge</title>");
    let _ = writeln!(svg, "  <rect width='100%' height='100%' fill='white'/>");
    let _ = writeln!(
        svg,
        "  <text x='{:.2}' y='28' font-size='18' text-anchor='middle'>AQI Gauge</text>",
        GAUGE_WIDTH / 2.0
    );

    for band in gauge_bands() {
        let _ = writeln!(
            svg,
            "  <path d='{}' fill='none' stroke='{}' stroke-width='{:.0}'><title>{} ({}-{})</title></path>",
            arc_path(band.start, band.end, GAUGE_RADIUS),
            band.category.color().name(),
            GAUGE_BAND_STROKE,
            band.category.label(),
            band.start,
            band.end
        );
    }

    let pinned = if prediction.value.is_nan() {
        GAUGE_MIN
    } else {
        prediction.value.clamp(GAUGE_MIN, GAUGE_MAX)
    };
    let bar_radius = GAUGE_RADIUS - GAUGE_BAND_STROKE / 2.0 - GAUGE_BAR_STROKE;
    if pinned > GAUGE_MIN {
        let _ = writeln!(
            svg,
            "  <path d='{}' fill='none' stroke='{}' stroke-width='{:.0}'/>",
            arc_path(GAUGE_MIN, pinned, bar_radius),
            color,
            GAUGE_BAR_STROKE
        );
    }

    let (cx, cy) = gauge_point(GAUGE_MIN, 0.0);
    let (nx, ny) = gauge_point(pinned, bar_radius - GAUGE_BAR_STROKE);
    let _ = writeln!(
        svg,
        "  <line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='{}' stroke-width='4' stroke-linecap='round'/>",
        cx, cy, nx, ny, color
    );
    let _ = writeln!(
        svg,
        "  <circle cx='{:.2}' cy='{:.2}' r='6' fill='{}'/>",
        cx, cy, color
    );

    for tick in [GAUGE_MIN, 100.0, 200.0, 300.0, 400.0, GAUGE_MAX] {
        let (tx, ty) = gauge_point(tick, GAUGE_RADIUS + GAUGE_BAND_STROKE / 2.0 + 12.0);
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' font-size='11' text-anchor='middle'>{}</text>",
            tx, ty, tick
        );
    }

    let _ = writeln!(
        svg,
        "  <text x='{:.2}' y='{:.2}' font-size='32' text-anchor='middle'>{}</text>",
        cx,
        cy + 44.0,
        prediction.display_value()
    );
    let _ = writeln!(svg, "</svg>");
    svg
}

fn trim_number(v: f64) -> String {
    let s = format!("{:.1}", v);
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/svg.rs"]
mod tests;
