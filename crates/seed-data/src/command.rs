//! The `seed` command: insert the sample listings and report success.

use std::io::Write;

use listings::{Listing, ListingStore};
use tracing::info;

use crate::db::{SeedError, Seeder};
use crate::fixtures::{SeedListing, sample_listings};

pub const HELP: &str = "Seed the database with sample data";
pub const SUCCESS_MESSAGE: &str = "Database seeded successfully!";

/// One-shot command that seeds a fixed list of listings.
pub struct SeedCommand<S> {
    seeder: Seeder<S>,
    listings: Vec<SeedListing>,
}

impl<S: ListingStore> SeedCommand<S> {
    /// Creates the command with the default sample listings.
    pub fn new(store: S) -> Self {
        Self::with_listings(store, sample_listings())
    }

    pub fn with_listings(store: S, listings: Vec<SeedListing>) -> Self {
        Self {
            seeder: Seeder::new(store),
            listings,
        }
    }

    pub fn listings(&self) -> &[SeedListing] {
        &self.listings
    }

    /// Seeds every listing in order, then writes [`SUCCESS_MESSAGE`] to `out`.
    ///
    /// The first store error is returned as-is and nothing is written.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Vec<Listing>, SeedError> {
        let created = self.seeder.seed_listings(&self.listings).await?;

        writeln!(out, "{SUCCESS_MESSAGE}")?;
        out.flush()?;

        info!("Seed completed: {} listings created", created.len());
        Ok(created)
    }
}
