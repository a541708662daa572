use axum::{
    http::{header, StatusCode},
    Json,
};
use shared::{
    api::{payloads::WorkoutResponse, Object},
    model::NewWorkout,
};
use tracing::{info, instrument};

use crate::{
    db::{workout_store, DatabaseConnection},
    AppError,
};

#[instrument(skip_all, fields(title = %new_workout.title))]
pub async fn create_workout(
    DatabaseConnection(conn): DatabaseConnection,
    Json(new_workout): Json<NewWorkout>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<WorkoutResponse>), AppError> {
    let workout = conn
        .interact(move |conn| workout_store::create_workout(conn, &new_workout))
        .await??;

    info!(id = workout.id, "Workout created");
    let location = Object::WorkoutId.path_with_id(workout.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WorkoutResponse { workout }),
    ))
}
