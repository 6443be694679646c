//! stackdeploy CLI tool.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "stackdeploy")]
#[command(about = "Create infrastructure stacks from local templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a stack and wait for it to finish
    Deploy {
        /// Name for the new stack
        stack_name: String,
        /// Path to the template file
        #[arg(default_value = "cloudformation/main.yaml")]
        template: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy {
            stack_name,
            template,
        } => {
            commands::deploy(&stack_name, &template).await?;
        }
    }

    Ok(())
}
