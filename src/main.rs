use std::net::SocketAddr;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use signup_probe::{AvailabilityResult, ProbeClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "signup-probe", version, about = "Check whether an email is already registered")]
struct Cli {
    /// Per-request timeout in seconds (each of the two calls).
    #[arg(long, env = "SIGNUP_PROBE_TIMEOUT", default_value_t = 30)]
    timeout_secs: u64,

    /// Print step diagnostics to stderr (also enabled by `SIGNUP_PROBE_DEBUG=1`).
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a single identifier.
    Check {
        identifier: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Serve `GET /check?email=...` over HTTP.
    Serve {
        #[arg(long, env = "SIGNUP_PROBE_HOST", default_value = "127.0.0.1")]
        host: String,
        #[arg(long, env = "SIGNUP_PROBE_PORT", default_value_t = 8088)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = ProbeClient::builder().timeout(Duration::from_secs(cli.timeout_secs));
    if cli.debug {
        builder = builder.debug(true);
    }

    let client = match builder.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Check { identifier, json } => {
            let result = client.check(&identifier).await;
            if json {
                match serde_json::to_string(&result) {
                    Ok(s) => println!("{s}"),
                    Err(e) => eprintln!("error: {e}"),
                }
            } else {
                print_result(&identifier, &result);
            }
            match result {
                AvailabilityResult::Failed { .. } => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            }
        }
        Command::Serve { host, port } => {
            let addr: SocketAddr = match format!("{host}:{port}").parse() {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("error: invalid listen address {host}:{port}: {e}");
                    return ExitCode::FAILURE;
                }
            };
            println!("API server running on: http://{addr}");
            println!("Usage: http://{addr}/check?email=test@outlook.com");
            if let Err(e) = signup_probe::server::serve(client, addr).await {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}

fn print_result(identifier: &str, result: &AvailabilityResult) {
    match result {
        AvailabilityResult::Available => println!("{identifier}: not registered (available)"),
        AvailabilityResult::Taken { suggestions } if suggestions.is_empty() => {
            println!("{identifier}: registered");
        }
        AvailabilityResult::Taken { suggestions } => {
            println!("{identifier}: registered; suggestions: {}", suggestions.join(", "));
        }
        AvailabilityResult::Failed { reason, .. } => println!("{identifier}: check failed: {reason}"),
    }
}
