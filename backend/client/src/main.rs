use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt};

use client::{
    NutritionClient,
    models::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, Dish},
    utils::popular_dishes,
};
use dataset::Entry;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, env = "NUTRITION_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Service banner and endpoint list
    Welcome,
    /// Every dish name
    Foods,
    /// Quick-pick dishes present in the dataset
    Popular,
    /// Direct lookup by name
    Food { name: String },
    /// Lookup through the search endpoint
    Search { dish: String },
    /// Autocomplete, needs at least 2 characters
    Suggest { query: String },
    /// Check the service is reachable
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = NutritionClient::new(&args.api_url, Duration::from_secs(args.timeout_secs))?;

    match args.command {
        Command::Welcome => print(&client.welcome().await?),
        Command::Foods => print(&client.all_foods().await?),
        Command::Popular => print(&popular_dishes(client.all_foods().await?)),
        Command::Food { name } => print_dish(&client.food(&name).await?),
        Command::Search { dish } => print_dish(&client.search(&dish).await?),
        Command::Suggest { query } => print(&client.suggestions(&query).await?),
        Command::Health => {
            let health = client.health().await;
            print(&health)?;

            if !health.is_healthy() {
                bail!("API unavailable");
            }

            Ok(())
        }
    }
}

fn print_dish(dish: &Dish) -> Result<()> {
    print(&Entry {
        name: &dish.name,
        record: &dish.record,
    })
}

fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}
