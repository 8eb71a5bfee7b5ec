use anyhow::{Context, Result};
use ingredient_normalizer::{IngredientNormalizer, NormalizerConfig};
use std::env;
use std::io::{self, BufRead};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging, to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = NormalizerConfig::from_env().context("Invalid normalizer configuration")?;
    let normalizer =
        IngredientNormalizer::with_config(config).context("Failed to initialize normalizer")?;

    let args: Vec<String> = env::args().skip(1).collect();
    let lines = if args.is_empty() {
        info!("Reading ingredient lines from stdin");
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .context("Failed to read stdin")?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        args
    };

    let records: Vec<_> = normalizer
        .normalize_batch(&lines)
        .iter()
        .map(|record| record.to_dict())
        .collect();

    info!("Normalized {} lines", records.len());
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
