use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::oneshot;

use unsplash_feed::config::Config;
use unsplash_feed::feed::{FeedItem, FeedLoader, RemoteFeedLoader};
use unsplash_feed::http::ReqwestHttpClient;

/// Get the config file path (~/.config/unsplash-feed/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("unsplash-feed")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "unsplash-feed", about = "Fetch one page of the Unsplash photo feed")]
struct Args {
    /// Page number to load
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,

    /// Config file (defaults to ~/.config/unsplash-feed/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print items as JSON instead of one line per photo
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    tracing::debug!(config = ?config, "Using configuration");

    let base_url = config.base_url().context("Invalid base_url in config")?;
    let client = ReqwestHttpClient::new(reqwest::Client::new(), config.access_key())
        .with_timeout(config.request_timeout())
        .with_max_response_bytes(config.max_response_bytes);
    let loader = RemoteFeedLoader::new(base_url, Arc::new(client));

    let (tx, rx) = oneshot::channel();
    loader.load(
        args.page,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );

    let items = rx
        .await
        .context("Feed load finished without a result")?
        .with_context(|| format!("Failed to load page {}", args.page))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            println!("{}", format_line(item));
        }
        eprintln!("{} photos on page {}", items.len(), args.page);
    }

    Ok(())
}

fn format_line(item: &FeedItem) -> String {
    format!(
        "{}\t{:>6} likes\t@{}\t{}",
        item.id(),
        item.likes(),
        item.profile().username(),
        item.description().unwrap_or("")
    )
}
