//! iifriends - auto-op/voice friends joining channels on ii.
//!
//! Meant to be invoked once per join notification, e.g. from a script
//! tailing ii's channel `out` files.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use iifriends::config::{Config, validate};
use iifriends::{Dispatcher, JoinContext, handle_join, telemetry};
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "iifriends")]
#[command(version)]
#[command(about = "Give op/voice to friends joining channels on ii", long_about = None)]
struct Cli {
    /// File which contains friends
    #[arg(long)]
    friends_file: Option<PathBuf>,

    /// Full path to the ii IRC directory
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    ircd: String,

    /// ii message to be processed
    #[arg(long)]
    message: String,

    /// Name of the IRC network the message came from
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    network: String,

    /// Our own nickname
    #[arg(long = "self")]
    self_nick: String,

    /// Optional TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Set log level to DEBUG
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Err(errors) = validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }

    let ctx = JoinContext {
        message: cli.message,
        friends_file: cli
            .friends_file
            .unwrap_or_else(|| config.friends.file_or_default()),
        ircd_root: PathBuf::from(cli.ircd),
        network: cli.network,
        self_nick: cli.self_nick,
    };
    let dispatcher = Dispatcher::new(&config.dispatch);

    let outcome = handle_join(&ctx, &dispatcher).await;
    debug!(?outcome, "Done");
    Ok(())
}
