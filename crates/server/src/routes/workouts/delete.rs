use axum::{extract::Path, http::StatusCode};
use tracing::{info, instrument};

use crate::{
    db::{workout_store, DatabaseConnection},
    AppError,
};

#[instrument(skip(conn))]
pub async fn delete_workout(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    conn.interact(move |conn| workout_store::delete_workout_by_id(conn, id))
        .await??;

    info!(id, "Workout deleted");
    Ok(StatusCode::NO_CONTENT)
}
