use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AqiCategory {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Brown,
}

impl ColorTag {
    pub fn name(self) -> &'static str {
        match self {
            ColorTag::Green => "green",
            ColorTag::Yellow => "yellow",
            ColorTag::Orange => "orange",
            ColorTag::Red => "red",
            ColorTag::Purple => "purple",
            ColorTag::Brown => "brown",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl AqiCategory {
    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Satisfactory => "Satisfactory",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Severe => "Severe",
        }
    }

    pub fn color(self) -> ColorTag {
        match self {
            AqiCategory::Good => ColorTag::Green,
            AqiCategory::Satisfactory => ColorTag::Yellow,
            AqiCategory::Moderate => ColorTag::Orange,
            AqiCategory::Poor => ColorTag::Red,
            AqiCategory::VeryPoor => ColorTag::Purple,
            AqiCategory::Severe => ColorTag::Brown,
        }
    }

    /// Text-report decoration only; CSV and JSON carry the plain label.
    pub fn emoji(self) -> &'static str {
        match self {
            AqiCategory::Good => "😊",
            AqiCategory::Satisfactory => "🙂",
            AqiCategory::Moderate => "😐",
            AqiCategory::Poor => "😷",
            AqiCategory::VeryPoor => "🤢",
            AqiCategory::Severe => "☠️",
        }
    }

    /// Inclusive upper bound of the band, `None` for the open-ended tier.
    pub fn upper_bound(self) -> Option<f64> {
        match self {
            AqiCategory::Good => Some(50.0),
            AqiCategory::Satisfactory => Some(100.0),
            AqiCategory::Moderate => Some(200.0),
            AqiCategory::Poor => Some(300.0),
            AqiCategory::VeryPoor => Some(400.0),
            AqiCategory::Severe => None,
        }
    }

    /// Exclusive lower bound of the band, `None` for the first tier.
    pub fn lower_bound(self) -> Option<f64> {
        let order = category_order();
        let idx = order.iter().position(|&c| c == self)?;
        if idx == 0 {
            None
        } else {
            order[idx - 1].upper_bound()
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn category_order() -> &'static [AqiCategory] {
    &[
        AqiCategory::Good,
        AqiCategory::Satisfactory,
        AqiCategory::Moderate,
        AqiCategory::Poor,
        AqiCategory::VeryPoor,
        AqiCategory::Severe,
    ]
}

/// Maps an AQI value to its tier. Bands are closed on the upper end:
/// 50 is Good, anything above 50 up to 100 is Satisfactory, and so on.
/// Every input classifies; NaN fails each comparison and lands in Severe.
pub fn classify(aqi: f64) -> AqiCategory {
    if aqi <= 50.0 {
        AqiCategory::Good
    } else if aqi <= 100.0 {
        AqiCategory::Satisfactory
    } else if aqi <= 200.0 {
        AqiCategory::Moderate
    } else if aqi <= 300.0 {
        AqiCategory::Poor
    } else if aqi <= 400.0 {
        AqiCategory::VeryPoor
    } else {
        AqiCategory::Severe
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeBand {
    pub start: f64,
    pub end: f64,
    pub category: AqiCategory,
}

pub const GAUGE_MIN: f64 = 0.0;
pub const GAUGE_MAX: f64 = 500.0;

/// Contiguous colored bands covering the gauge axis; the last tier is
/// drawn up to the end of the axis.
pub fn gauge_bands() -> Vec<GaugeBand> {
    category_order()
        .iter()
        .map(|&category| GaugeBand {
            start: category.lower_bound().unwrap_or(GAUGE_MIN),
            end: category.upper_bound().unwrap_or(GAUGE_MAX),
            category,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/category.rs"]
mod tests;
