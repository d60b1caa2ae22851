//! The create-listing seam used by callers that only need to insert rows.
//!
//! [`Database`] is the production implementation; tests can substitute
//! an in-memory store.

use async_trait::async_trait;

use crate::{
    database::Database,
    errors::AppError,
    models::{Listing, NewListing},
};

/// Something that can persist a new listing.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Creates one listing from the given fields and returns the stored row.
    async fn create_listing(&self, listing: &NewListing) -> Result<Listing, AppError>;
}

#[async_trait]
impl ListingStore for Database {
    async fn create_listing(&self, listing: &NewListing) -> Result<Listing, AppError> {
        Database::create_listing(self, listing).await
    }
}

#[async_trait]
impl<S: ListingStore + ?Sized> ListingStore for &S {
    async fn create_listing(&self, listing: &NewListing) -> Result<Listing, AppError> {
        (**self).create_listing(listing).await
    }
}
