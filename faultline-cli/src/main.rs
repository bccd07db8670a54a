//! # faultline CLI
//!
//! Demo driver for the user service.
//!
//! Usage:
//!   faultline get <id>
//!   faultline create <name> <email>
//!   faultline demo
//!
//! Examples:
//!   faultline get 1
//!   faultline --level debug get 999
//!   faultline create "Dana Diaz" dana@example.com
//!   faultline demo
//!
//! The logger is constructed here and handed to the service; errors bubble
//! back up and are logged exactly once, at this level, before exit.

use clap::{Parser, Subcommand};
use faultline_error::{find_kind, Error, ErrorKind};
use faultline_log::{Level, Logger};
use faultline_service::{InMemoryStore, UserService};
use serde_json::json;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "faultline")]
#[command(version, about = "Classified errors and structured logs, demonstrated")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Minimum log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    level: Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Look a user up by id
    Get {
        /// The user id
        id: i64,
    },
    /// Create a user
    Create {
        /// Display name
        name: String,
        /// Email address
        email: String,
    },
    /// Run the lookup walkthrough (ids 1, 999, -1)
    Demo,
}

/// Map an error's classification to a process exit code.
fn exit_code_for(err: &Error) -> ExitCode {
    match find_kind(err) {
        Some(ErrorKind::InvalidInput) => ExitCode::from(2),
        Some(ErrorKind::NotFound) => ExitCode::from(3),
        _ => ExitCode::FAILURE,
    }
}

/// Log one final operator-visible line for a failed operation.
fn report_failure(logger: &Logger, what: &str, err: &Error) {
    logger.error(what, &[("error", json!(err.to_string()))]);
}

fn run_get(service: &UserService<InMemoryStore>, logger: &Logger, id: i64) -> ExitCode {
    match service.get_user(id) {
        Ok(user) => {
            println!("{}", serde_json::to_string_pretty(&user).unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(logger, "user lookup failed", &err);
            eprintln!("{}", err);
            exit_code_for(&err)
        }
    }
}

fn run_create(
    service: &UserService<InMemoryStore>,
    logger: &Logger,
    name: &str,
    email: &str,
) -> ExitCode {
    match service.create_user(name, email) {
        Ok(user) => {
            println!("{}", serde_json::to_string_pretty(&user).unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(logger, "user creation failed", &err);
            eprintln!("{}", err);
            exit_code_for(&err)
        }
    }
}

fn run_demo(service: &UserService<InMemoryStore>, logger: &Logger) -> ExitCode {
    logger.info("demo starting", &[]);

    for id in [1, 999, -1] {
        match service.get_user(id) {
            Ok(user) => println!("found: {} <{}>", user.name, user.email),
            Err(err) => {
                logger.error(
                    "user lookup failed",
                    &[("error", json!(err.to_string())), ("user_id", json!(id))],
                );
                println!("error: {}", err);
            }
        }
    }

    logger.info("demo finished", &[]);
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logger = Logger::stdout(cli.level);
    let service = UserService::new(InMemoryStore::demo(), logger.clone());

    match cli.command {
        Commands::Get { id } => run_get(&service, &logger, id),
        Commands::Create { name, email } => run_create(&service, &logger, &name, &email),
        Commands::Demo => run_demo(&service, &logger),
    }
}
