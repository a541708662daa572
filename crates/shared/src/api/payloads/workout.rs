use serde::{Deserialize, Serialize};

use crate::model::Workout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub workout: Workout,
}
