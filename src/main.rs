mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::AppError;
use crate::input::{Pollutant, PollutantReading, load_batch};
use crate::model::ModelBundle;
use crate::model::artifact::load_bundle;
use crate::model::category::category_order;
use crate::pipeline::stage1_inputs::{run_stage1, run_stage1_batch};
use crate::pipeline::stage2_predict::{predict_one, run_stage2};
use crate::pipeline::stage3_report::{
    ReportOptions, Stage3Input, write_batch_report, write_reports,
};

#[derive(Parser, Debug)]
#[command(
    name = "aqi-predict",
    version,
    about = "Predict the Air Quality Index from six pollutant readings"
)]
struct Cli {
    #[arg(long, global = true, help = "Only log warnings and errors")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Predict AQI for one reading and write the report files.
    Predict {
        #[command(flatten)]
        artifacts: ArtifactArgs,
        #[command(flatten)]
        reading: ReadingArgs,
        #[arg(long, default_value = ".", help = "Output directory")]
        out: PathBuf,
        #[arg(long, help = "Skip the gauge and radar SVG charts")]
        no_charts: bool,
    },
    /// Predict AQI for every row of a CSV file of readings.
    Batch {
        #[command(flatten)]
        artifacts: ArtifactArgs,
        #[arg(long, help = "CSV with PM2.5,PM10,NO2,SO2,CO,O3 columns (.gz accepted)")]
        input: PathBuf,
        #[arg(long, default_value = ".", help = "Output directory")]
        out: PathBuf,
    },
    /// Print the AQI category bands.
    Bands,
}

#[derive(Args, Debug, Clone)]
struct ArtifactArgs {
    #[arg(
        long,
        env = "AQI_MODEL",
        default_value = "aqi_model.json",
        help = "Regression model artifact (JSON, .gz accepted)"
    )]
    model: PathBuf,
    #[arg(
        long,
        env = "AQI_SCALER",
        default_value = "scaler.json",
        help = "Feature scaler artifact (JSON, .gz accepted)"
    )]
    scaler: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct ReadingArgs {
    #[arg(long, allow_negative_numbers = true, default_value_t = Pollutant::Pm25.default_value(), help = "PM2.5 [0, 500]")]
    pm25: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = Pollutant::Pm10.default_value(), help = "PM10 [0, 500]")]
    pm10: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = Pollutant::No2.default_value(), help = "NO2 [0, 200]")]
    no2: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = Pollutant::So2.default_value(), help = "SO2 [0, 200]")]
    so2: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = Pollutant::Co.default_value(), help = "CO [0, 20]")]
    co: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = Pollutant::O3.default_value(), help = "O3 [0, 200]")]
    o3: f64,
}

impl ReadingArgs {
    fn to_reading(&self) -> PollutantReading {
        PollutantReading::new(self.pm25, self.pm10, self.no2, self.so2, self.co, self.o3)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum RunConfig {
    Predict {
        model_path: PathBuf,
        scaler_path: PathBuf,
        out_dir: PathBuf,
        reading: PollutantReading,
        report: ReportOptions,
    },
    Batch {
        model_path: PathBuf,
        scaler_path: PathBuf,
        input_path: PathBuf,
        out_dir: PathBuf,
    },
    Bands,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet);
    let config = resolve_config(cli.command);
    if let Err(err) = run(config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn resolve_config(command: Commands) -> RunConfig {
    match command {
        Commands::Predict {
            artifacts,
            reading,
            out,
            no_charts,
        } => RunConfig::Predict {
            model_path: artifacts.model,
            scaler_path: artifacts.scaler,
            out_dir: out,
            reading: reading.to_reading(),
            report: ReportOptions { charts: !no_charts },
        },
        Commands::Batch {
            artifacts,
            input,
            out,
        } => RunConfig::Batch {
            model_path: artifacts.model,
            scaler_path: artifacts.scaler,
            input_path: input,
            out_dir: out,
        },
        Commands::Bands => RunConfig::Bands,
    }
}

fn run(config: RunConfig) -> Result<(), AppError> {
    match config {
        RunConfig::Predict {
            model_path,
            scaler_path,
            out_dir,
            reading,
            report,
        } => {
            let bundle = load_artifacts(&model_path, &scaler_path)?;
            run_predict(&bundle, &reading, &out_dir, report)
        }
        RunConfig::Batch {
            model_path,
            scaler_path,
            input_path,
            out_dir,
        } => {
            let bundle = load_artifacts(&model_path, &scaler_path)?;
            run_batch(&bundle, &input_path, &out_dir)
        }
        RunConfig::Bands => {
            print!("{}", render_bands());
            Ok(())
        }
    }
}

fn load_artifacts(model_path: &Path, scaler_path: &Path) -> Result<ModelBundle, AppError> {
    load_bundle(model_path, scaler_path).map_err(|e| {
        tracing::error!(error = %e, "startup aborted");
        AppError::from(e)
    })
}

fn run_predict(
    bundle: &ModelBundle,
    reading: &PollutantReading,
    out_dir: &Path,
    options: ReportOptions,
) -> Result<(), AppError> {
    let prepared = run_stage1(reading)?;
    let prediction = predict_one(bundle, &prepared)?;
    tracing::info!(
        aqi = prediction.value,
        category = prediction.category.label(),
        "prediction complete"
    );

    println!("Predicted AQI: {}", prediction.display_value());
    println!(
        "Category: {} {}",
        prediction.category.label(),
        prediction.category.emoji()
    );

    let input = Stage3Input {
        prepared: &prepared,
        prediction: &prediction,
        bundle,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, out_dir, options)?;
    Ok(())
}

fn run_batch(bundle: &ModelBundle, input_path: &Path, out_dir: &Path) -> Result<(), AppError> {
    let readings = load_batch(input_path)?;
    let prepared = run_stage1_batch(&readings)?;
    let predictions = run_stage2(bundle, &prepared)?;
    let path = write_batch_report(&prepared, &predictions, out_dir)?;
    println!("{} predictions written to {}", predictions.len(), path.display());
    Ok(())
}

fn render_bands() -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<14}{:<12}{:<8}\n", "Category", "AQI", "Color"));
    for &category in category_order() {
        let range = match (category.lower_bound(), category.upper_bound()) {
            (None, Some(hi)) => format!("<= {}", hi),
            (Some(lo), Some(hi)) => format!("{}-{}", lo, hi),
            (Some(lo), None) => format!("> {}", lo),
            (None, None) => "any".to_string(),
        };
        out.push_str(&format!(
            "{:<14}{:<12}{:<8}\n",
            category.label(),
            range,
            category.color().name()
        ));
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
