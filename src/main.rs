use clap::Parser;
use color_eyre::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use energy_footprint::config::EnergyConfig;
use energy_footprint::export::{export_csv, export_json, FootprintReport};
use energy_footprint::model::RawInputs;
use energy_footprint::prefs::PrefStore;
use energy_footprint::ui::{default_form, App};

#[derive(Parser, Debug)]
#[command(name = "energy-footprint")]
#[command(about = "Energy Footprint - estimate your daily energy use in kWh/day")]
#[command(version)]
struct Args {
    /// Input record (.json or .toml); fields left out are treated as blank
    #[arg(long, value_name = "FILE")]
    inputs: Option<PathBuf>,

    /// TOML file overriding the built-in energy factors
    #[arg(long, value_name = "FILE")]
    factors: Option<PathBuf>,

    /// Export the breakdown to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export inputs, breakdown and comparison to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Print a text report instead of opening the dashboard
    #[arg(long)]
    report: bool,

    /// Preferences file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    prefs: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn is_batch(&self) -> bool {
        self.report || self.csv.is_some() || self.json.is_some()
    }
}

/// `RUST_LOG` directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn init_logging(log_file: Option<&Path>, batch: bool) -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let filter = log_filter(&directives);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // Stderr output would corrupt the dashboard
        None if batch => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), args.is_batch())?;

    let config = match &args.factors {
        Some(path) => EnergyConfig::load(path)?,
        None => EnergyConfig::default(),
    };

    let form = match &args.inputs {
        Some(path) => RawInputs::load(path)?,
        None => default_form(),
    };

    if args.is_batch() {
        let report = FootprintReport::new(&config, form.normalize());
        info!(
            total = report.result.grand_total,
            tier = ?report.comparison.tier,
            "computed footprint"
        );

        if let Some(csv_path) = &args.csv {
            export_csv(&report.result, csv_path)?;
            println!("Exported to CSV: {}", csv_path.display());
        }

        if let Some(json_path) = &args.json {
            export_json(&report, json_path)?;
            println!("Exported to JSON: {}", json_path.display());
        }

        if args.report {
            print!("{}", report.render_text());
        }

        return Ok(());
    }

    let store = match args.prefs {
        Some(path) => Some(PrefStore::new(path)),
        None => PrefStore::open_default()
            .inspect_err(|err| warn!(%err, "preferences will not be saved"))
            .ok(),
    };

    let mut app = App::new(config, form);
    if let Some(store) = store {
        app = app.with_prefs_store(store);
    }

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
