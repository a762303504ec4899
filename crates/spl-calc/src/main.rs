use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use spl_core::CombinationStep;
use spl_render::config::AppConfig;
use spl_render::{curve_table, evaluate_with, Outcome};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "spl-calc",
    version,
    about = "Combine the sound pressure levels of several noise sources"
)]
struct Cli {
    /// JSON configuration file (missing or invalid files fall back to defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive calculator window (default)
    Gui,
    /// Combine SPL values given as comma-separated text and print the steps
    Combine {
        /// Levels in dB, e.g. `90,85,88` or `90 85 88`
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        levels: Vec<String>,
        /// Print the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the correction-term curve as a CSV table
    Curve {
        /// Number of evenly spaced samples
        #[arg(long)]
        samples: Option<usize>,
        /// Upper end of the ΔL range in dB
        #[arg(long)]
        max_delta: Option<f64>,
        /// Write the table to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref());
    debug!(?config, "effective configuration");

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => {
            spl_render::run(config).map_err(|err| anyhow!("calculator window failed: {err}"))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Combine { levels, json } => run_combine(&config, &levels.join(","), json),
        Commands::Curve {
            samples,
            max_delta,
            output,
        } => run_curve(&config, samples, max_delta, output),
    }
}

fn run_combine(config: &AppConfig, text: &str, json: bool) -> Result<ExitCode> {
    match evaluate_with(text, config.decimals) {
        Outcome::Computed(report) => {
            if json {
                let payload = CombinePayload {
                    combined: report.combination.combined,
                    trace: &report.combination.trace,
                    ignored: &report.ignored,
                };
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("{report}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Warning(message) => {
            eprintln!("Warning: {message}");
            Ok(ExitCode::from(2))
        }
        Outcome::Error(message) => {
            eprintln!("Error: {message}");
            Ok(ExitCode::from(1))
        }
    }
}

fn run_curve(
    config: &AppConfig,
    samples: Option<usize>,
    max_delta: Option<f64>,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    let samples = samples.unwrap_or(config.curve.samples);
    let max_delta = max_delta.unwrap_or(config.curve.max_delta_db);
    if !max_delta.is_finite() || max_delta < 0.0 {
        bail!("--max-delta must be a finite, non-negative level difference in dB (got {max_delta})");
    }
    let table = curve_table(&spl_core::sample_curve(max_delta, samples));

    if let Some(path) = output {
        fs::write(&path, table).with_context(|| format!("writing {}", path.display()))?;
    } else {
        print!("{table}");
    }
    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
struct CombinePayload<'a> {
    combined: f64,
    trace: &'a [CombinationStep],
    ignored: &'a [String],
}
