//! Database connection pool using the OnceCell pattern.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::OnceCell;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Failures surfaced by pool initialisation and the liveness query.
///
/// A missing `DATABASE_URL` is an error rather than a panic: the health
/// handler converts every failure into its fixed-shape 500 body.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("DATABASE_URL is not set")]
    MissingUrl(#[from] std::env::VarError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Get or initialize the database connection pool.
/// Uses the DATABASE_URL environment variable for the connection string.
pub async fn get_pool() -> Result<&'static PgPool, DbError> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")?;

        PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await
            .map_err(DbError::from)
    })
    .await
}

/// Issue the liveness probe: exactly one `SELECT NOW()` round trip,
/// returning the backing store's current time.
pub async fn probe_time() -> Result<DateTime<Utc>, DbError> {
    let pool = get_pool().await?;

    let row: (DateTime<Utc>,) = sqlx::query_as("SELECT NOW()").fetch_one(pool).await?;

    Ok(row.0)
}
