mod chat;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pmkit_core::{Config, DocKind, PmAgent};

#[derive(Parser)]
#[command(name = "pmkit")]
#[command(about = "Product-manager assistant with chat, web search, and document generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat,
    /// Generate a document from a requirements file
    Doc {
        /// Document kind: brief, brd, or market
        kind: String,
        /// Path to a file with the requirements text
        #[arg(long)]
        requirements: PathBuf,
        /// Optional path to supplementary market data (market kind only)
        #[arg(long)]
        market_data: Option<PathBuf>,
        /// Output file (defaults to the document's standard file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a default configuration file
    InitConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Chat => {
            let agent = initialized_agent()?;
            chat::run(agent).await
        }
        Commands::Doc {
            kind,
            requirements,
            market_data,
            output,
        } => {
            let kind = DocKind::parse(&kind)
                .ok_or_else(|| format!("unknown document kind: {} (expected brief, brd, or market)", kind))?;

            let requirements = std::fs::read_to_string(&requirements)
                .map_err(|e| format!("failed to read {}: {}", requirements.display(), e))?;

            let market_data = match market_data {
                Some(path) => std::fs::read_to_string(&path)
                    .map_err(|e| format!("failed to read {}: {}", path.display(), e))?,
                None => String::new(),
            };

            let mut agent = initialized_agent()?;

            let content = if kind == DocKind::MarketResearch {
                agent
                    .generate_market_research(&requirements, &market_data)
                    .await
            } else {
                agent.generate_document(kind, &requirements).await
            }
            .map_err(|e| e.to_string())?;

            let path = output.unwrap_or_else(|| PathBuf::from(kind.file_name()));
            std::fs::write(&path, &content)
                .map_err(|e| format!("failed to write {}: {}", path.display(), e))?;

            println!("Wrote {} to {}", kind.display_name(), path.display());
            Ok(())
        }
        Commands::InitConfig => {
            print!("{}", Config::default_config_string());
            Ok(())
        }
    }
}

/// Builds an agent from config and environment credentials.
fn initialized_agent() -> Result<PmAgent, String> {
    let config = Config::load().map_err(|e| e.to_string())?;

    let model_key = config
        .llm
        .api_key_or_env()
        .ok_or("no model API key; set MODEL_API_KEY or [llm].api_key in pmkit.toml")?;
    let search_key = config
        .search
        .api_key_or_env()
        .ok_or("no search API key; set SEARCH_API_KEY or [search].api_key in pmkit.toml")?;

    let mut agent = PmAgent::with_config(config);
    agent
        .initialize(&model_key, &search_key)
        .map_err(|e| e.to_string())?;

    Ok(agent)
}
