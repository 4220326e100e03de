// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompter - a host-side method channel runtime.
//!
//! This is the binary entry point for the Prompter CLI.

mod doctor;
mod plugins;
mod query;

use clap::{Parser, Subcommand};
use tracing::{debug, error};

/// Prompter - a host-side method channel runtime.
#[derive(Parser, Debug)]
#[command(name = "prompter", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Invoke a channel and print the reply.
    Query {
        /// Channel to invoke.
        #[arg(long, default_value = prompter_platform::CHANNEL)]
        channel: String,
        /// Method name to send. The version plugin answers any method.
        #[arg(long, default_value = "platform_version")]
        method: String,
        /// Call arguments as a JSON value.
        #[arg(long)]
        args: Option<String>,
        /// Print a JSON envelope instead of the bare reply.
        #[arg(long)]
        json: bool,
    },
    /// List known plugins and their status.
    Plugins {
        /// Filter the catalog by name or description.
        #[arg(long)]
        search: Option<String>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Run environment diagnostics.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match prompter_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            prompter_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.host.log_level);
    debug!(host = %config.host.name, "configuration loaded");

    let result = match cli.command {
        Some(Commands::Query {
            channel,
            method,
            args,
            json,
        }) => query::run_query(&config, &channel, &method, args.as_deref(), json).await,
        Some(Commands::Plugins { search, json }) => {
            plugins::run_plugins(&config, search.as_deref(), json)
        }
        Some(Commands::Doctor { plain }) => doctor::run_doctor(&config, plain).await,
        None => {
            println!("prompter: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        error!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("prompter={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
