use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use keycheck::{
    checker::Checker,
    config::{Config, DEFAULT_ENDPOINT},
    core::{credential::Credential, util::ReqwestClient},
    output::{self, Format},
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "keycheck")]
#[command(about = "Check whether API bearer tokens are accepted by a remote endpoint")]
#[command(version)]
struct Cli {
    /// Credentials to check, in order
    #[arg(value_name = "KEY")]
    keys: Vec<Credential>,

    /// File with one credential per line (`#` starts a comment line)
    #[arg(short = 'f', long)]
    keys_file: Option<PathBuf>,

    /// Endpoint probed with each credential
    #[arg(long, default_value = DEFAULT_ENDPOINT, env = "KEYCHECK_ENDPOINT")]
    endpoint: Url,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value = "10", env = "KEYCHECK_TIMEOUT")]
    timeout: u64,

    /// Print one JSON object per credential instead of text lines
    #[arg(long, default_value = "false")]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,
}

impl Cli {
    /// Positional credentials first, then those from the keys file, in order.
    fn credentials(&self) -> Result<Vec<Credential>> {
        let mut credentials = self.keys.clone();
        if let Some(path) = &self.keys_file {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("unable to read keys file {}", path.display()))?;
            credentials.extend(Credential::parse_list(&contents));
        }
        Ok(credentials)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli.log_level)?;

    let credentials = cli.credentials()?;
    if credentials.is_empty() {
        warn!("no credentials given");
    }

    let config = Config::new(cli.endpoint, Duration::from_secs(cli.timeout));
    info!(endpoint = %config.endpoint, timeout = ?config.timeout, "starting");

    let http_client = ReqwestClient::new()?;
    let checker = Checker::new(config, http_client);

    let format = if cli.json { Format::Json } else { Format::Text };
    if let Some(header) = output::header(format) {
        println!("{header}");
    }

    checker
        .check_all(&credentials, |report| match output::render(format, report) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!("unable to render report: {e}"),
        })
        .await;

    Ok(())
}

/// Logs go to stderr; stdout carries only the report.
fn setup_logging(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level)
        .context("invalid log level")?
        .add_directive("hyper=warn".parse()?)
        .add_directive("rustls=warn".parse()?);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();

    Ok(())
}
