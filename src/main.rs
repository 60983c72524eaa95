#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use landmarks_config::instance;
use landmarks_config::prefs::PrefsFile;
use landmarks_config::{RunSettings, Runtime};

#[derive(Debug, Parser)]
#[command(name = "landmarks-config", version, about = "Resolve the level/condition plan for a run")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the level order and the condition paired with each level
    Plan {
        /// Settings JSON (defaults to the platform config dir)
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Level used when the settings list no levels
        #[arg(long, default_value = "default")]
        current_level: String,
    },
    /// Reset the stored display preferences to their shutdown values
    ResetDisplay {
        /// Display prefs JSON (defaults to the platform config dir)
        #[arg(long)]
        prefs: Option<PathBuf>,
    },
}

fn plan(settings: Option<PathBuf>, seed: Option<u64>, current_level: String) -> Result<()> {
    let settings = match settings {
        Some(path) => RunSettings::load_from(&path)?,
        None => RunSettings::load()?,
    };
    instance::install(settings.into_state())?;

    let mut runtime = Runtime::with_defaults(current_level, seed);
    let state = instance::get_instance(&mut runtime)?;
    info!(
        experiment = %state.experiment,
        run_mode = %state.run_mode,
        randomized = state.randomize_order,
        "Resolved run plan"
    );

    println!("experiment: {} ({})", state.experiment, state.run_mode);
    for (index, level, condition) in state.plan() {
        println!("{index:>3}  {level}  [{condition}]");
    }
    Ok(())
}

fn reset_display(prefs: Option<PathBuf>) -> Result<()> {
    let mut store = prefs.map(PrefsFile::new).unwrap_or_else(PrefsFile::default_location);
    let written = instance::shutdown(&mut store)?;
    println!(
        "display reset: {}x{} fullscreen={} ({})",
        written.width,
        written.height,
        written.fullscreen,
        store.path().display()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Plan { settings, seed, current_level } => plan(settings, seed, current_level)?,
        Command::ResetDisplay { prefs } => reset_display(prefs)?,
    }
    Ok(())
}
