use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::errors::AppError;

/// Nightly price in cents. Unsigned, so a negative price cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = AppError;

    /// Parses `"80"`, `"80.0"` or `"120.50"`. At most two fraction digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidInput(format!("invalid price: {s:?}"));
        let trimmed = s.trim();
        let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || frac.len() > 2 || !all_digits(frac) {
            return Err(invalid());
        }

        let whole: u32 = whole.parse().map_err(|_| invalid())?;
        let frac: u32 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u32>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(frac))
            .map(Price)
            .ok_or_else(invalid)
    }
}

/// A rentable property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_per_night: Price,
    pub created_at: OffsetDateTime,
}

/// Fields supplied when creating a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    pub name: String,
    pub description: String,
    pub price_per_night: Price,
}

impl NewListing {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price_per_night: price,
        }
    }
}

/// Raw `listings` row. The price comes back as whole cents.
#[derive(Debug, FromRow)]
pub(crate) struct ListingRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub created_at: OffsetDateTime,
}

impl TryFrom<ListingRow> for Listing {
    type Error = AppError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let cents = u32::try_from(row.price_cents).map_err(|_| {
            AppError::InvalidInput(format!(
                "listing {} has out of range price {}",
                row.id, row.price_cents
            ))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price_per_night: Price::from_cents(cents),
            created_at: row.created_at,
        })
    }
}
