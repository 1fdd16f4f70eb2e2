//! ORCID JSKOS Server - Entry Point
//!
//! Provides both stdio and HTTP transports.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use orcid_jskos::{config::Config, server::JskosServer};

#[derive(Parser, Debug)]
#[command(name = "orcid-jskos")]
#[command(about = "JSKOS API wrapper for ORCID")]
#[command(version)]
struct Cli {
    /// ORCID client id (public API credentials)
    #[arg(long, env = "ORCID_CLIENT_ID")]
    client_id: Option<String>,

    /// ORCID client secret
    #[arg(long, env = "ORCID_CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "http")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Cache access tokens for this many seconds (0 disables the cache)
    #[arg(long, default_value = "0", env = "ORCID_TOKEN_CACHE_SECS")]
    token_cache_secs: u64,

    /// Answer 502 when ORCID fails instead of an empty result
    #[arg(long, env = "ORCID_STRICT_UPSTREAM")]
    strict_upstream: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Line-delimited JSON on standard input/output
    Stdio,
    /// JSKOS API over HTTP
    #[default]
    Http,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries query results in stdio mode
    let writer = std::io::stderr;

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(writer)).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact().with_writer(writer)).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // credentials may live in a local .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        "Starting ORCID JSKOS server"
    );

    let mut config =
        Config::new(cli.client_id, cli.client_secret).with_token_cache(cli.token_cache_secs);
    config.surface_upstream_errors = cli.strict_upstream;

    if !config.has_credentials() {
        tracing::warn!("ORCID_CLIENT_ID or ORCID_CLIENT_SECRET not set, all queries will be empty");
    }

    let server = JskosServer::new(config)?;

    match cli.transport {
        Transport::Stdio => server.run_stdio().await?,
        Transport::Http => {
            tracing::info!(port = cli.port, "Running in HTTP mode");
            server.run_http(cli.port).await?;
        }
    }

    Ok(())
}
