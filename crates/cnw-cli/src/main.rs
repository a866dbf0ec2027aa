// crates/cnw-cli/src/main.rs
//
// CLI entrypoint for the CyberNorse Warriors collection.
//
// Initializes tracing, loads configuration, resolves the state file, and
// dispatches to a subcommand. Every mutating subcommand loads the collection,
// applies one operation, and writes it back.

mod commands;
mod config;
mod output;
mod store;

use clap::{Parser, Subcommand};
use commands::extend::ExtendArgs;
use commands::init::InitArgs;
use commands::mint::MintArgs;
use commands::ownership::TransferOwnershipArgs;
use commands::status::StatusArgs;
use commands::token::TokenArgs;
use commands::Context;
use config::CliConfig;
use output::OutputFormat;

/// CyberNorse Warriors CLI: batched collectible minting and supply management.
#[derive(Parser, Debug)]
#[command(
    name = "cnw",
    version = "0.1.0",
    about = "CyberNorse Warriors collection CLI: mint against batched supply, rotate metadata"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "~/.cnw/config.toml")]
    config: String,

    /// Path to the collection state file. Overrides `state_path` from config.
    #[arg(long, global = true)]
    state: Option<String>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a collection with its first batch.
    Init(InitArgs),

    /// Mint the next token.
    Mint(MintArgs),

    /// Append a supply batch with a new metadata URI (owner only, once).
    Extend(ExtendArgs),

    /// Display supply, extension lock, proceeds, and batches.
    Status(StatusArgs),

    /// Display owner and metadata of a minted token.
    Token(TokenArgs),

    /// Display the event log.
    Events,

    /// Transfer the owner privilege.
    TransferOwnership(TransferOwnershipArgs),
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // The log level lives in the config file, so load it before tracing is up
    // and report a load failure afterwards.
    let config_path = store::expand_tilde(&cli.config);
    let loaded = CliConfig::load(&config_path.to_string_lossy());
    let config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => CliConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    match &loaded {
        Ok(_) => tracing::debug!("Loaded configuration from {}", config_path.display()),
        Err(e) if config_path.exists() => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            config_path.display(),
            e
        ),
        Err(e) => tracing::debug!(
            "Could not load config from {}: {}. Using defaults.",
            config_path.display(),
            e
        ),
    }

    let state_path = cli.state.clone().unwrap_or_else(|| config.state_path.clone());
    let ctx = Context {
        state_path: store::expand_tilde(&state_path),
        format: if cli.json {
            OutputFormat::Json
        } else {
            config.output_format()
        },
    };

    match &cli.command {
        Commands::Init(args) => commands::init::run(&ctx, args)?,
        Commands::Mint(args) => commands::mint::run(&ctx, args)?,
        Commands::Extend(args) => commands::extend::run(&ctx, args)?,
        Commands::Status(args) => commands::status::run(&ctx, args)?,
        Commands::Token(args) => commands::token::run(&ctx, args)?,
        Commands::Events => commands::events::run(&ctx)?,
        Commands::TransferOwnership(args) => commands::ownership::run(&ctx, args)?,
    }

    Ok(())
}
