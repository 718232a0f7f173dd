pub mod activities;
pub mod health;
pub mod trips;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest(
            "/api",
            health::router()
                .merge(trips::router())
                .merge(activities::router()),
        )
        .layer(cors)
        .with_state(state)
}
