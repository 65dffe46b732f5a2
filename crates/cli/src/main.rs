use anyhow::{bail, Context, Result};
use api_shared::ErrorRes;
use clap::{Parser, Subcommand};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::fs;
use std::io::Write;

#[derive(Parser)]
#[command(name = "fileid-client")]
#[command(about = "CLI application for file operations")]
struct Cli {
    /// Base URL of the REST server
    #[arg(long, default_value = "http://localhost:5000/")]
    base_url: String,

    /// File to store the output in, or '-' for stdout
    #[arg(long, default_value = "-")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints the file metadata
    Stat {
        /// UUID of the file
        uuid: String,
    },
    /// Outputs the file content
    Read {
        /// UUID of the file
        uuid: String,
    },
}

impl Commands {
    fn endpoint(&self, base_url: &str) -> String {
        match self {
            Commands::Stat { uuid } => endpoint_url(base_url, uuid, "stat"),
            Commands::Read { uuid } => endpoint_url(base_url, uuid, "read"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let url = cli.command.endpoint(&cli.base_url);

    let client = Client::new();
    let response = client
        .get(&url)
        .send()
        .with_context(|| format!("request to {} failed", url))?;
    let status = response.status();
    let body = response.bytes().context("failed to read response body")?;

    send_to_output(&cli.output, &body)?;

    if !status.is_success() {
        bail!(describe_failure(status, &body));
    }

    Ok(())
}

/// Adds the trailing slash the endpoint paths are joined onto.
fn try_repair_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    }
}

fn endpoint_url(base_url: &str, uuid: &str, operation: &str) -> String {
    format!("{}file/{}/{}", try_repair_url(base_url), uuid, operation)
}

/// Writes `content` to stdout when `output` is `-`, otherwise to the named file.
fn send_to_output(output: &str, content: &[u8]) -> Result<()> {
    if output == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
    } else {
        fs::write(output, content).with_context(|| format!("failed to write {}", output))?;
        eprintln!("Output saved to {}", output);
    }
    Ok(())
}

fn describe_failure(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorRes>(body) {
        Ok(err) => format!("server returned {}: {}", status, err.error),
        Err(_) => format!("server returned {}", status),
    }
}
