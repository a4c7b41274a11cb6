use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{Result, anyhow};
use tracing::{info, warn};

use dataset::DEFAULT_KEY_COLUMN;

pub struct Config {
    pub port: u16,
    pub dataset_path: PathBuf,
    pub key_column: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("NUTRITION_PORT", "8000")?,
            dataset_path: try_load(
                "NUTRITION_DATASET",
                "data/Indian_Food_Nutrition_Processed.csv",
            )?,
            key_column: try_load("NUTRITION_KEY_COLUMN", DEFAULT_KEY_COLUMN)?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            anyhow!("Environment misconfigured: invalid {key} value: {e}")
        })
}
