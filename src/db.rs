use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::error::AppError;

pub type DbPool = SqlitePool;

/// Trip and activity requests are short single-statement transactions, so a
/// small pool is plenty even under concurrent planners.
const MAX_CONNECTIONS: u32 = 10;

/// Opens the trip-planner database. Schema setup happens separately via the
/// embedded migrations at startup.
pub async fn init_pool(database_url: &str) -> Result<DbPool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await?;
    Ok(pool)
}
