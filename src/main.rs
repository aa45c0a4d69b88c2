//! Command-line interface for fake-db-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Seed with the built-in defaults (1M users, 1M posts, batches of 10k)
//! fake-db-seed
//!
//! # Small run against another server
//! fake-db-seed \
//!   --mysql-host db.internal --mysql-user root --mysql-password root \
//!   --total-users 20000 --total-posts 50000 --batch-size 1000
//!
//! # Values from a config file, one override, nothing written
//! fake-db-seed --config seed.toml --seed 42 --dry-run
//! ```

use anyhow::Context;
use clap::Parser;
use fake_db_seed::{logging, run_seed, SeedConfig};
use seed_populate_mysql::MySQLSeedArgs;

#[derive(Parser)]
#[command(name = "fake-db-seed")]
#[command(about = "Populate MySQL with fake users and posts for load testing")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: MySQLSeedArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = SeedConfig::load(&cli.args).context("Failed to load configuration")?;

    run_seed(&config, cli.args.common.dry_run).await?;
    Ok(())
}
