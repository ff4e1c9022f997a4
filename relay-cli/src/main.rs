mod commands;
mod output;

use clap::{Parser, Subcommand};
use color_eyre::Result;

#[derive(Parser, Debug)]
#[command(name = "relay", version, about = "Execute declarative YAML workflows")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a workflow
    Run(commands::run::RunArgs),

    /// Validate a workflow file without running it
    Validate(commands::validate::ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Pick up OPENAI_API_KEY and friends from a local .env, if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => commands::run::execute(args).await,
        Command::Validate(args) => commands::validate::execute(args),
    }
}
