use crate::{db::DbPool, error::AppError, models::trip::Trip};

pub async fn insert(db: &DbPool, trip: &Trip) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO trips (id, name, start_date, end_date, trip_timezone) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(&trip.id)
    .bind(&trip.name)
    .bind(trip.start_date)
    .bind(trip.end_date)
    .bind(&trip.trip_timezone)
    .execute(db)
    .await?;
    Ok(())
}

/// All trips, newest start date first. The id tie-break keeps the order
/// stable across identical start dates.
pub async fn list(db: &DbPool) -> Result<Vec<Trip>, AppError> {
    let trips = sqlx::query_as::<_, Trip>(
        "SELECT id, name, start_date, end_date, trip_timezone FROM trips \
         ORDER BY start_date DESC, id ASC",
    )
    .fetch_all(db)
    .await?;
    Ok(trips)
}

pub async fn find_by_id(db: &DbPool, id: &str) -> Result<Option<Trip>, AppError> {
    let trip = sqlx::query_as::<_, Trip>(
        "SELECT id, name, start_date, end_date, trip_timezone FROM trips WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(trip)
}

pub async fn exists(db: &DbPool, id: &str) -> Result<bool, AppError> {
    let found = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM trips WHERE id = ?1)")
        .bind(id)
        .fetch_one(db)
        .await?;
    Ok(found)
}
