//! SentiLab CLI — crypto market sentiment dashboard and statistics.
//!
//! Commands:
//! - `dashboard` — fetch the index, derive statistics, write the PNG dashboard
//! - `stats` — print the market statistics block (or JSON)
//! - `export` — write the series as CSV/Parquet and the statistics as JSON

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use sentilab_core::data::FileProvider;
use sentilab_core::{SentimentError, SentimentProvider};
use sentilab_runner::{
    export_csv, export_parquet, export_stats_json, market_statistics, run_dashboard,
    run_pipeline, stats_to_json, DashboardConfig,
};
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "sentilab",
    about = "SentiLab — Crypto Fear & Greed Index dashboard"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level: trace, debug, info, warn, error.
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,
}

/// Options shared by every command.
#[derive(Args)]
struct SourceArgs {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of daily observations to request.
    #[arg(long)]
    limit: Option<NonZeroU32>,

    /// Read a saved API payload instead of calling the service.
    #[arg(long)]
    input: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the index and write the dashboard image.
    Dashboard {
        #[command(flatten)]
        source: SourceArgs,

        /// Output PNG path.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the market statistics.
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the full statistics as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Export the series and statistics.
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// CSV file for the series with rolling columns.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Parquet file for the series with rolling columns.
        #[arg(long)]
        parquet: Option<PathBuf>,

        /// JSON file for the derived statistics.
        #[arg(long)]
        stats_json: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli.log_level).and_then(|()| run(cli.command)) {
        match err.downcast_ref::<SentimentError>() {
            Some(e) => eprintln!("error [{}]: {e}", e.kind()),
            None => eprintln!("error: {err:#}"),
        }
        std::process::exit(1);
    }
}

fn init_logging(level: &str) -> Result<()> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => bail!("unknown log level '{other}'"),
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Dashboard { source, output } => {
            let mut config = load_config(&source)?;
            if let Some(path) = output {
                config.output.path = path;
            }
            let provider = build_provider(&source, &config)?;
            let out = run_dashboard(&config, provider.as_ref())?;
            print!("{}", market_statistics(&out.stats));
            println!("Dashboard written to {}", config.output.path.display());
        }
        Commands::Stats { source, json } => {
            let config = load_config(&source)?;
            let provider = build_provider(&source, &config)?;
            let out = run_pipeline(&config, provider.as_ref())?;
            if json {
                println!("{}", stats_to_json(&out.stats)?);
            } else {
                print!("{}", market_statistics(&out.stats));
            }
        }
        Commands::Export {
            source,
            csv,
            parquet,
            stats_json,
        } => {
            if csv.is_none() && parquet.is_none() && stats_json.is_none() {
                bail!("nothing to export: pass at least one of --csv, --parquet, --stats-json");
            }
            let config = load_config(&source)?;
            let provider = build_provider(&source, &config)?;
            let out = run_pipeline(&config, provider.as_ref())?;

            if let Some(path) = csv {
                export_csv(&out.series, out.rolling(), &path)?;
                println!("CSV written to {}", path.display());
            }
            if let Some(path) = parquet {
                export_parquet(&out.series, out.rolling(), &path)?;
                println!("Parquet written to {}", path.display());
            }
            if let Some(path) = stats_json {
                export_stats_json(&out.stats, &path)?;
                println!("Statistics written to {}", path.display());
            }
        }
    }
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn load_config(args: &SourceArgs) -> Result<DashboardConfig, SentimentError> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(limit) = args.limit {
        config.source.limit = limit.get();
    }
    if let Some(secs) = args.timeout_secs {
        config.source.timeout_secs = secs;
    }
    config.validate()?;
    Ok(config)
}

fn build_provider(
    args: &SourceArgs,
    config: &DashboardConfig,
) -> Result<Box<dyn SentimentProvider>, SentimentError> {
    match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading saved payload");
            Ok(Box::new(FileProvider::new(path.clone())))
        }
        None => Ok(Box::new(config.http_provider()?)),
    }
}
