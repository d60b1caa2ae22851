use crate::errors::AppError;
use crate::models::{Listing, ListingRow, NewListing};
use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations in `migrations/`.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Listings migrations applied");
        Ok(())
    }

    pub async fn create_listing(&self, listing: &NewListing) -> Result<Listing, AppError> {
        let row: ListingRow = sqlx::query_as(
            r#"
            INSERT INTO listings (id, name, description, price_per_night, created_at)
            VALUES ($1, $2, $3, $4::BIGINT::NUMERIC / 100, $5)
            RETURNING id, name, description,
                      (price_per_night * 100)::BIGINT AS price_cents,
                      created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&listing.name)
        .bind(&listing.description)
        .bind(i64::from(listing.price_per_night.cents()))
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    pub async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, AppError> {
        let row: Option<ListingRow> = sqlx::query_as(
            r#"
            SELECT id, name, description,
                   (price_per_night * 100)::BIGINT AS price_cents,
                   created_at
            FROM listings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Listing::try_from).transpose()
    }

    pub async fn count_listings_named(&self, name: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM listings WHERE name = $1")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns true if a row was deleted.
    pub async fn delete_listing(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
