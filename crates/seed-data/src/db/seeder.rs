//! Database seeding utilities.

use listings::{AppError, Listing, ListingStore, NewListing};
use thiserror::Error;
use tracing::{debug, info};

use crate::fixtures::SeedListing;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] AppError),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Inserts sample records through a [`ListingStore`].
pub struct Seeder<S> {
    store: S,
}

impl<S: ListingStore> Seeder<S> {
    /// Creates a new seeder backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Seeds listings one at a time, in order.
    ///
    /// Stops at the first failure. Rows created before it are kept and
    /// nothing is deduplicated, so seeding twice yields duplicates.
    pub async fn seed_listings(&self, listings: &[SeedListing]) -> Result<Vec<Listing>, SeedError> {
        info!("Seeding {} listings...", listings.len());

        let mut created = Vec::with_capacity(listings.len());
        for seed in listings {
            let listing = self.store.create_listing(&NewListing::from(seed)).await?;
            debug!(
                "  Created listing {} ({}, {}/night)",
                listing.id, listing.name, listing.price_per_night
            );
            created.push(listing);
        }

        info!("Seeded {} listings", created.len());
        Ok(created)
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }
}
