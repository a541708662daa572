use axum::{extract::Path, Json};
use shared::{api::payloads::WorkoutResponse, model::NewWorkout};
use tracing::{info, instrument};

use crate::{
    db::{workout_store, DatabaseConnection},
    AppError,
};

#[instrument(skip(conn, workout), fields(title = %workout.title))]
pub async fn update_workout(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<i64>,
    Json(workout): Json<NewWorkout>,
) -> Result<Json<WorkoutResponse>, AppError> {
    let workout = conn
        .interact(move |conn| {
            workout_store::update_workout_by_id(conn, id, &workout)?;
            workout_store::get_workout_by_id(conn, id)
        })
        .await??;

    info!(id, "Workout updated");
    Ok(Json(WorkoutResponse { workout }))
}
