//! Case Dashboard CLI
//!
//! Runs one dashboard cycle against the analytics backend and prints the
//! rendered result:
//! - Initial load (no filters)
//! - Filtered load
//! - Section titles
//! - Default config generation

use anyhow::Context;
use case_dashboard::{
    config::{generate_default_config, Config, ConfigError, LoggingConfig},
    CycleOutcome, DashboardController, DataClient, FormValues, Section, TerminalCharts,
    TerminalPage, UiEvent,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "case-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Case analytics dashboard client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dashboard with no filters
    Load,

    /// Load the dashboard with filters
    Filter {
        /// Group
        #[arg(short, long, default_value = "")]
        group: String,
        /// Status (repeat for several)
        #[arg(short, long)]
        status: Vec<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        end: String,
    },

    /// Print the title of a section (acordo, diario, geral)
    Title {
        section: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref(), std::io::stderr)?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }
        Commands::Title { section } => {
            println!("{}", Section::from_key(&section).title());
            Ok(())
        }
        Commands::Load => {
            let (controller, page, charts) = build_controller(&config)?;
            let outcome = controller.on_page_load().await;
            report(outcome, &page, &charts)
        }
        Commands::Filter {
            group,
            status,
            start,
            end,
        } => {
            let (controller, page, charts) = build_controller(&config)?;
            let form = FormValues {
                group,
                statuses: status,
                start_date: start,
                end_date: end,
            };
            let outcome = controller
                .on_filter_submit(&mut UiEvent::new(), &form)
                .await;
            report(outcome, &page, &charts)
        }
    }
}

/// Load the config while a plain bootstrap subscriber is active
///
/// The configured subscriber can't exist before its config does, so config
/// discovery logs through this one instead.
fn load_config<W>(path: Option<&Path>, make_writer: W) -> Result<Config, ConfigError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(bootstrap, || match path {
        Some(path) => {
            let config = Config::load_with_env(path)?;
            tracing::info!("Loaded config from {:?}", path);
            Ok(config)
        }
        None => Ok(Config::load_default()),
    })
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("case_dashboard={}", logging.level)),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_controller(
    config: &Config,
) -> anyhow::Result<(DashboardController, Arc<TerminalPage>, Arc<TerminalCharts>)> {
    let client = DataClient::new(config.api.client_config()).context("building HTTP client")?;
    tracing::info!("Backend: {}", client.config().data_url());

    let page = Arc::new(TerminalPage::new());
    let charts = Arc::new(TerminalCharts::new());
    let controller = DashboardController::new(Arc::new(client), page.clone(), charts.clone());

    Ok((controller, page, charts))
}

fn report(
    outcome: CycleOutcome,
    page: &TerminalPage,
    charts: &TerminalCharts,
) -> anyhow::Result<()> {
    match outcome {
        CycleOutcome::Rendered { .. } => {
            println!("{}", page.snapshot());
            print!("{}", charts.snapshot());
            Ok(())
        }
        CycleOutcome::Superseded => Ok(()),
        CycleOutcome::Failed(e) => Err(e.into()),
    }
}
