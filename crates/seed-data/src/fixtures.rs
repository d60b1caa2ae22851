//! The sample listings inserted by the `seed` binary.

use listings::{NewListing, Price};

/// A sample listing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedListing {
    pub name: &'static str,
    pub description: &'static str,
    pub price_per_night: Price,
}

impl SeedListing {
    pub const fn new(name: &'static str, description: &'static str, price: Price) -> Self {
        Self {
            name,
            description,
            price_per_night: price,
        }
    }
}

impl From<&SeedListing> for NewListing {
    fn from(seed: &SeedListing) -> Self {
        NewListing::new(seed.name, seed.description, seed.price_per_night)
    }
}

pub const BEACH_HOUSE: SeedListing = SeedListing::new(
    "Beach House",
    "A beautiful house by the beach",
    Price::from_cents(12050),
);

pub const MOUNTAIN_CABIN: SeedListing = SeedListing::new(
    "Mountain Cabin",
    "A cozy cabin in the mountains",
    Price::from_cents(8000),
);

/// Default sample data, in insertion order.
pub fn sample_listings() -> Vec<SeedListing> {
    vec![BEACH_HOUSE, MOUNTAIN_CABIN]
}
