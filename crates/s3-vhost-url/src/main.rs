use s3_vhost_url::config::CodecConfig;
use s3_vhost_url::query::QueryParams;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about = "Encode and decode virtual-hosted-style S3 URLs", long_about = None)]
struct Opt {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the URL of an object
    Encode {
        #[arg(long)]
        region: Option<String>,

        #[arg(long)]
        bucket: Option<String>,

        #[arg(long)]
        key: Option<String>,

        /// Query parameter as `key=value`, or `key` without a value. Repeatable, order is kept.
        #[arg(long = "param", value_name = "KEY[=VALUE]")]
        params: Vec<String>,
    },
    /// Print the address of a URL as JSON
    Decode {
        url: String,

        /// JSON file with decoder limits
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn parse_params(raw: &[String]) -> Result<Option<QueryParams>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let mut params = QueryParams::with_capacity(raw.len());
    for s in raw {
        let (key, value) = match s.split_once('=') {
            Some((key, value)) => (key, Some(value.to_owned())),
            None => (s.as_str(), None),
        };
        if params.insert(key.to_owned(), value).is_some() {
            bail!("duplicate query parameter: {key:?}");
        }
    }
    Ok(Some(params))
}

fn load_config(path: &Path) -> Result<CodecConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config = serde_json::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

fn main() -> Result<()> {
    setup_tracing();

    match Opt::parse().command {
        Command::Encode {
            region,
            bucket,
            key,
            params,
        } => {
            let params = parse_params(&params)?;
            let url = s3_vhost_url::encode(region.as_deref(), bucket.as_deref(), key.as_deref(), params.as_ref());
            println!("{url}");
        }
        Command::Decode { url, config } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => CodecConfig::default(),
            };
            let addr = s3_vhost_url::decode_with_config(&url, &config)?;
            println!("{}", serde_json::to_string_pretty(&addr)?);
        }
    }

    Ok(())
}
