//! `fbgraph`: command-line access to the Facebook Graph API.
//!
//! # Usage
//!
//! ```
//! fbgraph --token $TOKEN feed me --limit 5
//! fbgraph publish "hello" --to 1234
//! fbgraph --config ~/.config/fbgraph.toml delete 1234_5678
//! ```
//!
//! Output is pretty-printed JSON on stdout; logs go to stderr and are
//! filtered with `RUST_LOG`.

mod commands;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use commands::Command;
use fbgraph_api::GraphApi;
use fbgraph_http::ReqwestTransport;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Facebook Graph API client")]
struct Cli {
  /// Path to a TOML config file (base_url, access_token, timeout_secs).
  #[arg(short, long, env = "FBGRAPH_CONFIG", default_value = "fbgraph.toml")]
  config: PathBuf,

  /// OAuth access token; overrides the config file and environment.
  #[arg(long)]
  token: Option<String>,

  /// Graph API base URL, version segment included.
  #[arg(long)]
  base_url: Option<String>,

  /// Request timeout in seconds.
  #[arg(long)]
  timeout_secs: Option<u64>,

  #[command(subcommand)]
  command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut settings = Settings::load(&cli.config)?;
  if let Some(token) = cli.token {
    settings.access_token = Some(token);
  }
  if let Some(base_url) = cli.base_url {
    settings.base_url = base_url;
  }
  if let Some(timeout) = cli.timeout_secs {
    settings.timeout_secs = timeout;
  }
  if settings.access_token.is_none() {
    tracing::warn!("no access token configured; requests are unauthenticated");
  }

  let transport =
    ReqwestTransport::new(settings.transport()).context("failed to build HTTP client")?;
  let api = GraphApi::with_base_url(transport, &settings.base_url);

  let output = cli.command.run(&api).await?;
  println!(
    "{}",
    serde_json::to_string_pretty(&output).context("failed to format output")?
  );
  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_is_well_formed() { Cli::command().debug_assert(); }

  #[test]
  fn feed_defaults_to_me() {
    let cli = Cli::try_parse_from(["fbgraph", "feed", "--limit", "5"]).unwrap();
    assert!(matches!(cli.command, Command::Feed { ref id, .. } if id == "me"));
    assert_eq!(cli.config, PathBuf::from("fbgraph.toml"));
  }

  #[test]
  fn global_flags_precede_subcommand() {
    let cli =
      Cli::try_parse_from(["fbgraph", "--token", "tok", "delete", "1_2"]).unwrap();
    assert_eq!(cli.token.as_deref(), Some("tok"));
    assert!(matches!(cli.command, Command::Delete { ref id } if id == "1_2"));
  }
}
