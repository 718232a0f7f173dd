use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{activity::Activity, trip::Trip},
    store,
};

use super::{normalize_optional, require_text};

/// Matches the storage-layer bound on the notes column.
const MAX_NOTES_CHARS: usize = 1000;

/// Payload for creating an activity under a trip. As with [`super::trips::NewTrip`],
/// required fields are `Option` so a missing value maps to a 400, not a 422.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub day: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub notes: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
}

/// Fails with not-found when the trip id is unknown, never an empty list.
pub async fn list_activities(db: &DbPool, trip_id: &str) -> Result<Vec<Activity>, AppError> {
    if !store::trips::exists(db, trip_id).await? {
        return Err(AppError::NotFound("Trip"));
    }
    store::activities::list_for_trip(db, trip_id).await
}

pub async fn create_activity(
    db: &DbPool,
    trip_id: &str,
    input: NewActivity,
) -> Result<Activity, AppError> {
    // Parent resolution comes first: an unknown trip is reported before any
    // complaint about the activity body.
    let trip = store::trips::find_by_id(db, trip_id)
        .await?
        .ok_or(AppError::NotFound("Trip"))?;

    let title = require_text(input.title, "title")?;
    let kind = match input.kind {
        // Omitted defaults to "other"; an explicitly blank value is rejected.
        None => "other".to_string(),
        some => require_text(some, "type")?,
    };
    let day = input
        .day
        .ok_or_else(|| AppError::Validation("day is required".into()))?;

    validate_times(input.start_time, input.end_time)?;
    validate_day_in_trip(day, &trip)?;
    validate_coordinates(input.lat, input.lng)?;

    let notes = normalize_optional(input.notes);
    if let Some(notes) = &notes {
        if notes.chars().count() > MAX_NOTES_CHARS {
            return Err(AppError::Validation(format!(
                "notes must not exceed {MAX_NOTES_CHARS} characters"
            )));
        }
    }

    let activity = Activity {
        id: Uuid::new_v4().to_string(),
        trip_id: trip.id,
        day,
        start_time: input.start_time,
        end_time: input.end_time,
        title,
        kind,
        notes,
        lat: input.lat,
        lng: input.lng,
        address: normalize_optional(input.address),
    };
    store::activities::insert(db, &activity).await?;

    tracing::debug!(activity_id = %activity.id, trip_id = %activity.trip_id, "activity created");
    Ok(activity)
}

/// Deleting an already-deleted id yields not-found again; the second outcome
/// is distinguishable, not fatal.
pub async fn delete_activity(db: &DbPool, id: &str) -> Result<(), AppError> {
    if !store::activities::delete(db, id).await? {
        return Err(AppError::NotFound("Activity"));
    }
    tracing::debug!(activity_id = %id, "activity deleted");
    Ok(())
}

fn validate_times(start: Option<NaiveTime>, end: Option<NaiveTime>) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(AppError::Validation("endTime must be >= startTime".into()));
        }
    }
    Ok(())
}

fn validate_day_in_trip(day: NaiveDate, trip: &Trip) -> Result<(), AppError> {
    if day < trip.start_date || day > trip.end_date {
        return Err(AppError::Validation("day must be within trip dates".into()));
    }
    Ok(())
}

fn validate_coordinates(lat: Option<f64>, lng: Option<f64>) -> Result<(), AppError> {
    if lat.is_some() != lng.is_some() {
        return Err(AppError::Validation(
            "lat and lng must be provided together".into(),
        ));
    }
    Ok(())
}
