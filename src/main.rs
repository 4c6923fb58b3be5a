//! Command line front-end for the traffic simulation.
//!
//! # Usage
//!
//! ```bash
//! traffic-lights --road "C..G..R..C" --steps 10
//! traffic-lights --config run.json --format json --strict
//! ```
//!
//! Set `RUST_LOG=debug` to see signal changes and vehicle exits.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use traffic_lights::audit::{self, AuditStrategy, Violation};
use traffic_lights::config::{ConfigError, SimulationConfig};
use traffic_lights::{ParseError, RunHistory, SimulationRunner};

/// Errors that can occur when running the simulation from the command line.
#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Either --road or --config is required")]
    MissingRoad,
    #[error("Audit failed with {} violation(s)", .0.len())]
    Audit(Vec<Violation>),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Simulate traffic on a one-dimensional road")]
struct Args {
    /// Road to simulate, e.g. "C..G..R..C"
    #[arg(short, long, value_name = "ROAD", conflicts_with = "config")]
    road: Option<String>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 0, value_name = "STEPS", conflicts_with = "config")]
    steps: usize,

    /// JSON file with `road` and `steps`
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Fail when the run breaks a structural invariant
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn simulation_config(&self) -> Result<SimulationConfig, Error> {
        match (&self.config, &self.road) {
            (Some(path), _) => Ok(SimulationConfig::load(path)?),
            (None, Some(road)) => Ok(SimulationConfig::new(road.clone(), self.steps)),
            (None, None) => Err(Error::MissingRoad),
        }
    }

    fn audit_strategy(&self) -> AuditStrategy {
        if self.strict {
            AuditStrategy::Abort
        } else {
            AuditStrategy::IgnoreAndLog
        }
    }
}

fn check(history: &RunHistory, strategy: AuditStrategy) -> Result<(), Error> {
    let Err(violations) = audit::audit(history.snapshots()) else {
        return Ok(());
    };

    match strategy {
        AuditStrategy::Abort => Err(Error::Audit(violations)),
        AuditStrategy::IgnoreAndLog => {
            for violation in &violations {
                log::warn!("{violation}");
            }
            Ok(())
        }
    }
}

fn main() -> Result<(), Error> {
    pretty_env_logger::init();

    let args = Args::parse();
    let config = args.simulation_config()?;

    log::info!("road={:?} steps={}", config.road, config.steps);

    let history = SimulationRunner::new(config.road()?).run(config.steps);
    check(&history, args.audit_strategy())?;

    if let Some(duration) = history.duration() {
        log::debug!("run took {duration:?}");
    }

    match args.format {
        Format::Text => {
            for state in history.states() {
                println!("{state}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&history)?),
    }

    Ok(())
}
