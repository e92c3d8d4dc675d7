//! `alchemy` — offline companion for the `alchemy-api` crate.
//!
//! Provides two subcommands:
//!
//! - **`validate`** — check that text is long enough to send to the service.
//! - **`parse`** — read a saved response body and print the typed result.
//!
//! Both subcommands read from a file path or from stdin (`-`). No network
//! calls are made.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use alchemy_api::{validate_text, EndpointKind, Status};
use clap::{Parser, Subcommand};
use tracing::debug;

/// alchemy — AlchemyAPI response toolkit
///
/// Validate input text and inspect saved service responses.
#[derive(Parser)]
#[command(name = "alchemy", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that text meets the service's minimum length.
    ///
    /// Exits 0 and prints `valid` if the text may be sent, 1 otherwise.
    ///
    /// Pass `-` as FILE to read from stdin.
    Validate {
        /// Path to a text file, or `-` for stdin.
        file: PathBuf,
    },

    /// Parse a saved response body and print it as JSON.
    ///
    /// Malformed bodies are not an error: they parse as an empty response
    /// with status UNSET. Exits 1 if the service reported ERROR.
    ///
    /// Examples:
    ///   alchemy parse --endpoint keywords response.json
    ///   curl -s "$URL" | alchemy parse -e sentiment -
    Parse {
        /// Endpoint the body came from:
        /// envelope | sentiment | keywords | entities | language | category
        #[arg(
            short = 'e',
            long,
            value_name = "KIND",
            env = "ALCHEMY_ENDPOINT",
            default_value = "envelope"
        )]
        endpoint: EndpointKind,

        /// Path to a JSON file, or `-` for stdin.
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alchemy_api=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Validate { file } => {
            let text = read_input(&file);
            match validate_text(text.as_str()) {
                Ok(()) => println!("valid"),
                Err(e) => {
                    eprintln!("error: {}", e);
                    process::exit(1);
                }
            }
        }

        Command::Parse { endpoint, file } => {
            let body = read_input(&file);
            debug!(%endpoint, bytes = body.len(), "parsing response body");

            let analysis = endpoint.parse(body.as_str());
            let envelope = analysis.envelope();

            let json = serde_json::to_string_pretty(&analysis)
                .unwrap_or_else(|e| fatal(&format!("failed to serialise result: {}", e)));
            println!("{}", json);

            if envelope.status == Status::Error {
                match envelope.status_info {
                    Some(info) => eprintln!("error: service reported ERROR: {}", info),
                    None => eprintln!("error: service reported ERROR"),
                }
                process::exit(1);
            }
        }
    }
}

/// Read the full contents of a file, or stdin when the path is `"-"`.
fn read_input(path: &PathBuf) -> String {
    if path.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| fatal(&format!("failed to read stdin: {}", e)));
        buf
    } else {
        fs::read_to_string(path).unwrap_or_else(|e| {
            fatal(&format!("failed to read {}: {}", path.display(), e))
        })
    }
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("alchemy: {}", msg);
    process::exit(2);
}
