use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use titanium_white::config::{resolve_api_key_from_env, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT};
use titanium_white::{
    AuthorizationPolicy, CourtSession, Endpoint, RequestArguments, SessionDescriptor,
    DEFAULT_PAGE_DEPTH,
};

#[derive(Parser, Debug)]
#[command(name = "courtlistener")]
#[command(about = "Query the CourtListener REST API", long_about = None)]
struct Cli {
    /// Path relative to the endpoint, e.g. `people/`
    path: Option<String>,

    /// API root the path is resolved against
    #[arg(long = "endpoint", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// API token; read from the environment when omitted
    #[arg(long = "api-key")]
    api_key: Option<String>,

    /// Environment variable holding the API token
    #[arg(long = "api-key-env", default_value = DEFAULT_API_KEY_ENV)]
    api_key_env: String,

    /// Query parameter as `key=value`, may be repeated
    #[arg(short = 'p', long = "param", value_parser = parse_key_value)]
    params: Vec<(String, String)>,

    /// Request header as `name=value`, may be repeated
    #[arg(short = 'H', long = "header", value_parser = parse_key_value)]
    headers: Vec<(String, String)>,

    /// Maximum number of pages to fetch
    #[arg(short = 'd', long = "depth", default_value_t = DEFAULT_PAGE_DEPTH)]
    depth: u32,

    /// Fetch pages after the first concurrently
    #[arg(long = "concurrent", default_value_t = false)]
    concurrent: bool,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs")]
    timeout_secs: Option<u64>,

    /// Keep an `Authorization` header passed with --header
    #[arg(long = "preserve-auth", default_value_t = false)]
    preserve_auth: bool,

    /// Enable debug output
    #[arg(long = "debug", default_value_t = false)]
    debug: bool,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "warn,titanium_white=debug"
    } else {
        "warn,titanium_white=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let api_key = resolve_api_key_from_env(cli.api_key.as_deref(), &cli.api_key_env)
        .context("Failed to resolve CourtListener API key")?;
    let endpoint = Endpoint::new(&cli.endpoint)?;

    let descriptor = SessionDescriptor::builder()
        .endpoint(endpoint)
        .api_key(api_key)
        .build()?;

    let policy = if cli.preserve_auth {
        AuthorizationPolicy::PreserveExisting
    } else {
        AuthorizationPolicy::Overwrite
    };
    let mut builder = CourtSession::builder(descriptor).authorization_policy(policy);
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let session = builder.build()?;

    let mut args = RequestArguments::builder()
        .params(cli.params.into_iter().collect())
        .headers(cli.headers.into_iter().collect());
    if let Some(path) = cli.path {
        args = args.url(path);
    }
    let args = args.build();

    let pages = if cli.concurrent {
        session.fetch_all_concurrent(args, cli.depth).await
    } else {
        session.fetch_all(args, cli.depth).await
    }
    .context("CourtListener query failed")?;

    println!("{}", serde_json::to_string_pretty(&pages)?);

    session.close();
    Ok(())
}
