use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use tonemeter::config::Config;
use tonemeter::sentiment::lexicon::LexiconAnalyzer;
use tonemeter::sentiment::traits::PolarityAnalyzer;

/// tonemeter: offensiveness scoring for text and CSV files.
///
/// Scores text from 0 (clearly positive) to 100 (clearly negative) by
/// inverting its sentiment polarity. Anything above 50 is flagged as
/// likely offensive.
#[derive(Parser)]
#[command(name = "tonemeter", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (POST /api/predict, POST /api/predict-file)
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides TONEMETER_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Score a single piece of text
    Score {
        /// The text to score
        text: String,
    },

    /// Score the `text` column of a CSV file
    ScoreFile {
        /// Path to the CSV file
        path: PathBuf,

        /// Print the JSON the API would return instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("tonemeter=info,tower_http=info")
            }),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let analyzer: Arc<dyn PolarityAnalyzer> = Arc::new(LexiconAnalyzer::new()?);

    match cli.command {
        Commands::Serve { port, bind } => {
            let mut config = config;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            info!(
                origins = ?config.allowed_origins,
                batch_concurrency = config.batch_concurrency,
                "Starting tonemeter API"
            );
            tonemeter::web::run_server(tonemeter::web::AppState::new(config, analyzer)).await?;
        }

        Commands::Score { text } => {
            let verdict =
                tonemeter::scoring::offensiveness::score_text(analyzer.as_ref(), &text).await?;
            tonemeter::output::terminal::display_verdict(&text, &verdict);
        }

        Commands::ScoreFile { path, json } => {
            let rows = tonemeter::pipeline::file::score_csv_file(
                analyzer.as_ref(),
                &path,
                config.batch_concurrency,
            )
            .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                tonemeter::output::terminal::display_batch(&rows);
            }
        }
    }

    Ok(())
}
