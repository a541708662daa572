use axum::{extract::Path, Json};
use shared::api::payloads::WorkoutResponse;
use tracing::instrument;

use crate::{
    db::{workout_store, DatabaseConnection},
    AppError,
};

#[instrument(skip(conn))]
pub async fn fetch_workout(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<i64>,
) -> Result<Json<WorkoutResponse>, AppError> {
    let workout = conn
        .interact(move |conn| workout_store::get_workout_by_id(conn, id))
        .await??;

    Ok(Json(WorkoutResponse { workout }))
}
