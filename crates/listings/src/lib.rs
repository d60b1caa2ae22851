pub mod database;
pub mod errors;
pub mod models;
pub mod store;

pub use database::Database;
pub use errors::AppError;
pub use models::{Listing, NewListing, Price};
pub use store::ListingStore;
