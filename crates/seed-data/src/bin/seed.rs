//! Seed the database with sample listings.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! Every run inserts the sample rows again; existing rows are not checked.
//! Logs go to stderr, so stdout only carries the success line.

use clap::Parser;
use seed_data::Database;
use seed_data::cli::SeedArgs;
use seed_data::command::SeedCommand;
use seed_data::config::SeedConfig;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Exits before any connection on --help or unknown arguments
    let _args = SeedArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SeedConfig::from_env();

    tracing::info!("Connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    let db = Database::new(pool);
    if config.run_migrations {
        db.migrate().await?;
    }

    let command = SeedCommand::new(db);
    command.run(&mut std::io::stdout()).await?;

    Ok(())
}
