//! Command-line entry point for Recollect.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{debug, info};
use recollect_rs::config::{ClientSettings, load_env_file};
use recollect_rs::memory::Mem0Client;
use recollect_rs::{
    AddRequest, DEFAULT_USER_ID, QueryMode, QueryRequest, add_memory, init_logging, query_memory,
};
use std::path::PathBuf;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "recollect", version)]
struct Cli {
    /// Env file to load instead of searching for `.env`
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search a user's memories and print them as JSON (default)
    Query {
        /// User whose memories are searched
        #[arg(long, default_value = DEFAULT_USER_ID)]
        user_id: String,
        /// Substitute the user id into the query template
        #[arg(long)]
        interpolate: bool,
    },
    /// Store the sample transcript for a user
    Add {
        /// User the transcript is stored under
        #[arg(long, default_value = DEFAULT_USER_ID)]
        user_id: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Query {
            user_id: DEFAULT_USER_ID.to_string(),
            interpolate: false,
        }
    }
}

/// Entry point for the Recollect CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let env_file = load_env_file(cli.env_file.as_deref()).context("failed to load env file")?;
    debug!("env bootstrap done (file_loaded={})", env_file.is_some());

    let settings = ClientSettings::from_env().context("failed to read mem0 settings")?;
    let client = Mem0Client::connect(settings.client_options())
        .await
        .context("failed to connect to mem0")?;

    match cli.command.unwrap_or_default() {
        Command::Query {
            user_id,
            interpolate,
        } => {
            let mode = if interpolate {
                QueryMode::Interpolated
            } else {
                QueryMode::Literal
            };
            query_memory(&client, &QueryRequest::for_user(user_id, mode))
                .await
                .context("memory query failed")?;
        }
        Command::Add { user_id } => {
            let request = AddRequest::sample_for(user_id);
            add_memory(&client, &request)
                .await
                .context("failed to add memories")?;
            info!("transcript stored (user_id={})", request.user_id);
        }
    }
    Ok(())
}
