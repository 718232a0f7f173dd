use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    error::AppError,
    services::trips::{self, NewTrip},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/trips", get(list).post(create))
}

async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = trips::list_trips(&state.db).await?;
    Ok(Json(items))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewTrip>,
) -> Result<impl IntoResponse, AppError> {
    let trip = trips::create_trip(&state.db, input).await?;
    let location = format!("/api/trips/{}", trip.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(trip)))
}
