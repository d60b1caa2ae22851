//! In-memory [`ListingStore`] for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use listings::{AppError, Listing, ListingStore, NewListing};
use time::OffsetDateTime;
use uuid::Uuid;

/// Keeps created listings in a vector. Optionally rejects the insert at a
/// given zero-based call index to simulate a storage failure.
pub struct MemoryStore {
    listings: Mutex<Vec<Listing>>,
    calls: Mutex<usize>,
    fail_on_call: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            listings: Mutex::new(Vec::new()),
            calls: Mutex::new(0),
            fail_on_call: None,
        }
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::new()
        }
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.listings.lock().unwrap().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn create_listing(&self, listing: &NewListing) -> Result<Listing, AppError> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            let current = *calls;
            *calls += 1;
            current
        };

        if self.fail_on_call == Some(call) {
            return Err(AppError::Database(sqlx::Error::Protocol(
                "simulated insert failure".to_string(),
            )));
        }

        let created = Listing {
            id: Uuid::new_v4(),
            name: listing.name.clone(),
            description: listing.description.clone(),
            price_per_night: listing.price_per_night,
            created_at: OffsetDateTime::now_utc(),
        };
        self.listings.lock().unwrap().push(created.clone());

        Ok(created)
    }
}
