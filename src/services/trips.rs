use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::{db::DbPool, error::AppError, models::trip::Trip, store};

use super::require_text;

/// Payload for creating a trip. Required fields are `Option` so that a
/// missing value surfaces as a validation error rather than a decode
/// rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub trip_timezone: Option<String>,
}

pub async fn list_trips(db: &DbPool) -> Result<Vec<Trip>, AppError> {
    store::trips::list(db).await
}

pub async fn create_trip(db: &DbPool, input: NewTrip) -> Result<Trip, AppError> {
    let name = require_text(input.name, "name")?;
    let trip_timezone = require_text(input.trip_timezone, "tripTimezone")?;
    let start_date = input
        .start_date
        .ok_or_else(|| AppError::Validation("startDate is required".into()))?;
    let end_date = input
        .end_date
        .ok_or_else(|| AppError::Validation("endDate is required".into()))?;

    if start_date > end_date {
        return Err(AppError::Validation("startDate must be <= endDate".into()));
    }

    let trip = Trip {
        id: Uuid::new_v4().to_string(),
        name,
        start_date,
        end_date,
        trip_timezone,
    };
    store::trips::insert(db, &trip).await?;

    tracing::debug!(trip_id = %trip.id, "trip created");
    Ok(trip)
}
