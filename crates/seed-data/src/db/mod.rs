//! Database integration for seeding sample data.
//!
//! The [`Seeder`] inserts sample listings through any
//! [`ListingStore`](listings::ListingStore), usually a [`listings::Database`].

#[cfg(test)]
pub(crate) mod memory;
mod seeder;

pub use seeder::{SeedError, Seeder};
