use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub mod client_repo;
pub mod credential_repo;
pub mod records;

pub type DbPool = Pool<Postgres>;

/// Initializes the database connection pool.
///
/// # Errors
/// Returns `sqlx::Error` if the connection fails.
pub async fn init_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(20).connect(database_url).await
}

/// Builds a pool that defers connecting until the first query.
///
/// # Errors
/// Returns `sqlx::Error` if the URL cannot be parsed.
pub fn lazy_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(20).connect_lazy(database_url)
}
