use std::fmt;

use serde::Serialize;

pub mod batch;
pub mod source;

pub use batch::load_batch;

pub const N_POLLUTANTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "SO2")]
    So2,
    #[serde(rename = "CO")]
    Co,
    #[serde(rename = "O3")]
    O3,
}

impl Pollutant {
    /// Fixed feature order expected by the model and used by every report.
    pub const ALL: [Pollutant; N_POLLUTANTS] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
        Pollutant::O3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Pollutant::Pm25 => 0,
            Pollutant::Pm10 => 1,
            Pollutant::No2 => 2,
            Pollutant::So2 => 3,
            Pollutant::Co => 4,
            Pollutant::O3 => 5,
        }
    }

    /// Inclusive (min, max) accepted by the input fields.
    pub fn range(self) -> (f64, f64) {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => (0.0, 500.0),
            Pollutant::No2 | Pollutant::So2 | Pollutant::O3 => (0.0, 200.0),
            Pollutant::Co => (0.0, 20.0),
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            Pollutant::Pm25 => 50.0,
            Pollutant::Pm10 => 100.0,
            Pollutant::No2 => 50.0,
            Pollutant::So2 => 20.0,
            Pollutant::Co => 1.0,
            Pollutant::O3 => 50.0,
        }
    }

    /// Matches a column header against the pollutant names. Case and
    /// surrounding whitespace are ignored, `PM25` is accepted for `PM2.5`.
    pub fn from_header(header: &str) -> Option<Pollutant> {
        let norm = header.trim().to_ascii_uppercase();
        match norm.as_str() {
            "PM2.5" | "PM25" | "PM2_5" => Some(Pollutant::Pm25),
            "PM10" => Some(Pollutant::Pm10),
            "NO2" => Some(Pollutant::No2),
            "SO2" => Some(Pollutant::So2),
            "CO" => Some(Pollutant::Co),
            "O3" => Some(Pollutant::O3),
            _ => None,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantReading {
    values: [f64; N_POLLUTANTS],
}

impl Default for PollutantReading {
    fn default() -> Self {
        let mut values = [0.0; N_POLLUTANTS];
        for p in Pollutant::ALL {
            values[p.index()] = p.default_value();
        }
        Self { values }
    }
}

impl PollutantReading {
    pub fn new(pm25: f64, pm10: f64, no2: f64, so2: f64, co: f64, o3: f64) -> Self {
        Self {
            values: [pm25, pm10, no2, so2, co, o3],
        }
    }

    pub fn from_values(values: [f64; N_POLLUTANTS]) -> Self {
        Self { values }
    }

    pub fn get(&self, pollutant: Pollutant) -> f64 {
        self.values[pollutant.index()]
    }

    pub fn set(&mut self, pollutant: Pollutant, value: f64) {
        self.values[pollutant.index()] = value;
    }

    /// Values in [`Pollutant::ALL`] order.
    pub fn values(&self) -> [f64; N_POLLUTANTS] {
        self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for (pollutant, value) in self.iter() {
            if !value.is_finite() {
                return Err(InputError::NonFinite { pollutant, value });
            }
        }
        Ok(())
    }

    /// Pins every value into its pollutant range and reports what moved.
    pub fn clamped(&self) -> (PollutantReading, Vec<ClampEvent>) {
        let mut out = *self;
        let mut events = Vec::new();
        for (pollutant, value) in self.iter() {
            let (min, max) = pollutant.range();
            // + 0.0 turns -0.0 into 0.0
            let pinned = value.clamp(min, max) + 0.0;
            if pinned != value {
                events.push(ClampEvent {
                    pollutant,
                    requested: value,
                    applied: pinned,
                });
            }
            out.set(pollutant, pinned);
        }
        (out, events)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClampEvent {
    pub pollutant: Pollutant,
    pub requested: f64,
    pub applied: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid input: {pollutant} must be a finite number, got {value}")]
    NonFinite { pollutant: Pollutant, value: f64 },
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
