use std::io;

use clap::Parser;

mod errors;
use errors::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Environment variable holding the GitHub access token.
const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Glek CLI: export GitHub issue labels into gembel JSON format
#[derive(Parser)]
#[command(name = "glek")]
#[command(about = "Export GitHub issue labels into gembel JSON format", long_about = None)]
struct Cli {
    /// Repository to export labels from, in owner/repo form
    repository: Option<String>,
}

fn version() -> &'static str {
    // Print version info from baked-in value
    option_env!("GLEK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

fn usage_text() -> String {
    format!(
        r#"
Name:
  glek - export GitHub issue labels into gembel JSON format

Version:
  {}

Usage:
  glek <owner/repo>

  To specify GITHUB_TOKEN when running it:

  GITHUB_TOKEN=token glek <owner/repo>
"#,
        version()
    )
}

fn usage(err: &Error) {
    eprintln!("Error: {err}");
    eprintln!("{}", usage_text());
}

async fn run(repository: &str, token: &str) -> Result<(), Error> {
    let (owner, repo) = glek_core::repository::split_owner_repo(repository)?;

    let octocrab = github_client::create_token_client(token)?;
    let client = github_client::GitHubClient::new(octocrab);

    let document = glek_core::export_labels(&client, owner, repo).await?;

    let stdout = io::stdout();
    document.write_pretty(stdout.lock())?;
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("GLEK_LOG"))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Exit 1 with the glek usage text, not clap's exit 2
            usage(&Error::InvalidArguments(e.kind().to_string()));
            std::process::exit(1);
        }
    };

    let Some(repository) = cli.repository else {
        usage(&Error::MissingRepository);
        std::process::exit(1);
    };

    let token = match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.is_empty() => token,
        _ => {
            usage(&Error::MissingToken);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&repository, &token).await {
        match &e {
            // A malformed repository argument is a usage problem
            Error::Export(glek_core::Error::InvalidRepository(_)) => usage(&e),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}
