use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};

use crate::{
    error::AppError,
    services::activities::{self, NewActivity},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips/:trip_id/activities", get(list).post(create))
        .route("/activities/:id", delete(remove))
}

async fn list(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let items = activities::list_activities(&state.db, &trip_id).await?;
    Ok(Json(items))
}

async fn create(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Json(input): Json<NewActivity>,
) -> Result<impl IntoResponse, AppError> {
    let activity = activities::create_activity(&state.db, &trip_id, input).await?;
    let location = format!("/api/activities/{}", activity.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(activity)))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    activities::delete_activity(&state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
