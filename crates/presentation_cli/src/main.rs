//! errmap CLI
//!
//! Explains how database and gRPC failures are classified and rendered.

#![allow(clippy::print_stdout)]

mod probe;

use std::path::PathBuf;

use application::ports::RpcCode;
use application::services::{
    Classified, classify_database_error, is_concurrent_transaction_conflict,
};
use clap::{Parser, Subcommand};
use domain::ErrorKind;
use infrastructure::{AppConfig, LoggingConfig, classify_grpc_error, init_tracing};
use presentation_http::{ApiError, http_status, set_expose_internal_errors};
use tracing::debug;

use crate::probe::{ProbeError, ProbePort};

/// errmap CLI
#[derive(Debug, Parser)]
#[command(name = "errmap-cli")]
#[command(author, version, about = "Explain error classification", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a configuration file (defaults to ./errmap.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every error kind with its HTTP status and default message
    Kinds,

    /// Classify a database error by SQLSTATE
    ///
    /// Use `no-rows` for a query that matched nothing.
    /// Example: errmap-cli sql 23505 --constraint users_email_key
    Sql {
        /// SQLSTATE code, or `no-rows`
        code: String,

        /// Offending column
        #[arg(long)]
        column: Option<String>,

        /// Offending constraint
        #[arg(long)]
        constraint: Option<String>,
    },

    /// Classify a gRPC status
    ///
    /// Example: errmap-cli grpc not-found "user 42 missing"
    Grpc {
        /// Status code name (e.g. `not-found`) or number
        code: RpcCode,

        /// Status message
        #[arg(default_value = "")]
        message: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logging settings after applying `-v`
fn logging_config(config: &AppConfig, verbose: u8) -> LoggingConfig {
    let mut logging = config.logging.clone();
    if verbose > 0 {
        logging.level = log_filter_from_verbosity(verbose).to_string();
    }
    logging
}

/// Where a category comes from: a constraint check, an RPC status, or a
/// retryable transaction conflict
const fn kind_origin(kind: ErrorKind) -> &'static str {
    if kind.is_store_violation() {
        "constraint"
    } else if kind.is_transport() {
        "rpc"
    } else {
        "retry"
    }
}

/// One row of the `kinds` table
fn kind_row(kind: ErrorKind) -> String {
    format!(
        "{:<34} {:<4} {:<10} {}",
        kind.as_str(),
        http_status(kind).as_u16(),
        kind_origin(kind),
        kind.default_message()
    )
}

/// Status line and pretty JSON body for a classification outcome
fn render<E>(classified: Classified<E>) -> anyhow::Result<String>
where
    E: std::error::Error,
{
    let (status, body) = ApiError::from(classified).to_parts();
    Ok(format!(
        "HTTP {status}\n{}",
        serde_json::to_string_pretty(&body)?
    ))
}

fn grpc_status(code: RpcCode, message: String) -> tonic::Status {
    tonic::Status::new(tonic::Code::from(code.as_i32()), message)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())?;
    init_tracing(&logging_config(&config, cli.verbose))?;
    set_expose_internal_errors(config.expose_internal_errors());
    debug!(environment = %config.environment, "Configuration loaded");

    match cli.command {
        Commands::Kinds => {
            for kind in ErrorKind::ALL {
                println!("{}", kind_row(kind));
            }
        },

        Commands::Sql {
            code,
            column,
            constraint,
        } => {
            let probe = ProbeError::new(&code, column, constraint);
            let conflict = is_concurrent_transaction_conflict(&ProbePort, &probe);
            let classified = classify_database_error(&ProbePort, probe);
            println!("{}", render(classified)?);
            println!("retryable conflict: {conflict}");
        },

        Commands::Grpc { code, message } => {
            if let Some(classified) = classify_grpc_error(Some(grpc_status(code, message))) {
                println!("{}", render(classified)?);
            }
        },
    }

    Ok(())
}
