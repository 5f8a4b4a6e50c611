use anyhow::Result;
use clap::{Parser, Subcommand};
use tooniq::cli::SendArgs;

/// tooniq - corporate site and contact relay
#[derive(Parser)]
#[command(name = "tooniq")]
#[command(about = "TOONIQ corporate website and contact relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Contact form from the command line
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
}

#[derive(Subcommand)]
enum ContactCommands {
    /// Submit one inquiry to the relay or a hosted form API
    Send(SendArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = tooniq::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    tooniq::observability::init_observability(
        "tooniq",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => tooniq::cli::serve(config, host, port).await,
        Commands::Contact {
            command: ContactCommands::Send(args),
        } => tooniq::cli::send(config, args).await,
    }
}
