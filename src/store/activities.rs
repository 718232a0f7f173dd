use crate::{db::DbPool, error::AppError, models::activity::Activity};

const ACTIVITY_COLUMNS: &str =
    "id, trip_id, day, start_time, end_time, title, kind, notes, lat, lng, address";

pub async fn insert(db: &DbPool, activity: &Activity) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO activities \
         (id, trip_id, day, start_time, end_time, title, kind, notes, lat, lng, address) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    )
    .bind(&activity.id)
    .bind(&activity.trip_id)
    .bind(activity.day)
    .bind(activity.start_time)
    .bind(activity.end_time)
    .bind(&activity.title)
    .bind(&activity.kind)
    .bind(&activity.notes)
    .bind(activity.lat)
    .bind(activity.lng)
    .bind(&activity.address)
    .execute(db)
    .await?;
    Ok(())
}

/// Activities of one trip ordered by day, then start time. SQLite sorts
/// NULL before any value on ASC, so untimed activities lead their day.
pub async fn list_for_trip(db: &DbPool, trip_id: &str) -> Result<Vec<Activity>, AppError> {
    let query = format!(
        "SELECT {ACTIVITY_COLUMNS} FROM activities WHERE trip_id = ?1 \
         ORDER BY day ASC, start_time ASC"
    );
    let activities = sqlx::query_as::<_, Activity>(&query)
        .bind(trip_id)
        .fetch_all(db)
        .await?;
    Ok(activities)
}

/// Removes the activity, reporting whether a row actually existed.
pub async fn delete(db: &DbPool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM activities WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
