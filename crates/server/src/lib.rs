use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod db;

mod cli;
pub use cli::*;

mod errors;
pub use errors::*;

mod state;
pub use state::*;

pub mod routes;

/// Builds the HTTP surface over the workout store
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route(Object::Health.path(), get(routes::health))
        .route(Object::Workout.path(), post(routes::create_workout))
        .route(
            Object::WorkoutId.path(),
            get(routes::fetch_workout)
                .put(routes::update_workout)
                .delete(routes::delete_workout),
        )
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
