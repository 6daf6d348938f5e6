use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use score_infrastructure::ConfigService;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "score")]
#[command(about = "Score Inteligente CLI - session and navigation client", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.config/score/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the logged-in identity
    Whoami,
    /// Open a route (e.g. "#dashboard") and print what would be shown
    Open {
        #[arg(default_value = "#login")]
        fragment: String,
    },
    /// Select one of the group's managed companies
    SelectCompany { name: String },
    /// Print per-company score summaries
    Summary,
    /// List employees eligible for an oral test
    Eligible {
        #[arg(long)]
        test_id: String,
        #[arg(long)]
        min_score: Option<f64>,
        #[arg(long)]
        max_score: Option<f64>,
        #[arg(long)]
        company: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let config = config_service.get_config()?;
    init_tracing(&config.logging.level);

    let shell = commands::build_shell(&config)?;
    let output = commands::Output { json: cli.json };

    match cli.command {
        Commands::Login { email, password } => {
            commands::session::login(&shell, &output, &email, &password).await?
        }
        Commands::Logout => commands::session::logout(&shell).await,
        Commands::Whoami => commands::session::whoami(&shell, &output).await?,
        Commands::Open { fragment } => commands::open::run(&shell, &output, &fragment).await?,
        Commands::SelectCompany { name } => {
            commands::session::select_company(&shell, &name).await?
        }
        Commands::Summary => commands::report::summary(&shell, &output).await?,
        Commands::Eligible {
            test_id,
            min_score,
            max_score,
            company,
        } => {
            let criteria = score_core::oral_test::EligibilityCriteria {
                test_id,
                min_score,
                max_score,
                company,
            };
            commands::report::eligible(&shell, &output, &criteria).await?
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured level applies to the score crates.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("score={}", level.trim())));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
