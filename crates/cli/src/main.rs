//! Freefall CLI: run a simulation or serve the HTTP interface.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use freefall::ValidationError;
use freefall_server::ServerConfig;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

mod commands;
mod input;

/// Freefall simulator
#[derive(Parser, Debug)]
#[command(name = "freefall")]
#[command(author, version, about = "Vertical free-fall simulator", long_about = None)]
struct Cli {
    /// Logging verbosity level
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate one drop and print the trajectory
    Run(commands::RunArgs),

    /// Serve the HTTP interface
    Serve {
        /// Bind address
        #[arg(short, long, default_value = "127.0.0.1")]
        bind: std::net::IpAddr,

        /// Server port
        #[arg(short, long, default_value = "3030")]
        port: u16,

        /// Most integration steps one request may take
        #[arg(long, default_value_t = freefall_server::DEFAULT_MAX_STEPS)]
        max_steps: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging disabled: {error}");
    }

    debug!("freefall v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Run(args) => commands::run(&args),
        Commands::Serve {
            bind,
            port,
            max_steps,
        } => commands::serve(ServerConfig {
            bind,
            port,
            max_steps,
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error_line(&error));
            ExitCode::FAILURE
        }
    }
}

/// Validation failures print their message alone; other errors get a prefix
/// and their full cause chain.
fn error_line(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ValidationError>() {
        Some(invalid) => invalid.to_string(),
        None => format!("Error: {error:#}"),
    }
}
