//! Sample data seeding for the travel app.
//!
//! Inserts a fixed set of demo listings through the `listings` crate's
//! persistence layer.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let db = Database::new(pool);
//! let command = SeedCommand::new(db);
//! command.run(&mut std::io::stdout()).await?;
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod db;
pub mod fixtures;

// Re-export core types from listings crate
pub use listings::{Database, Listing, ListingStore, NewListing, Price};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::command::{SUCCESS_MESSAGE, SeedCommand};
    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, Seeder};
    pub use crate::fixtures::{SeedListing, sample_listings};
    pub use crate::{Database, Listing, ListingStore, NewListing, Price};
}
