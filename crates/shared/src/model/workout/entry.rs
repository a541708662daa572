use serde::{Deserialize, Serialize};

/// One exercise line of a stored workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_name: String,
    pub sets: i32,
    /// Absent for timed exercises
    pub reps: Option<i32>,
    /// Absent for rep based exercises
    pub duration_seconds: Option<i32>,
    /// Absent for bodyweight exercises
    pub weight: Option<f64>,
    pub notes: String,
    /// 1-based position within the workout
    pub order_index: i32,
}

/// An exercise line as submitted by a caller, before the store has assigned
/// identities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkoutEntry {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: String,
    /// Either every entry of a workout sets this or none do. When none do the
    /// position in the submitted list is used
    pub order_index: Option<i32>,
}

impl NewWorkoutEntry {
    pub(crate) fn validation_messages(&self, position: usize) -> Vec<String> {
        let mut messages = Vec::new();
        let label = format!("entry {}", position + 1);

        if self.exercise_name.trim().is_empty() {
            messages.push(format!("{label}: exercise name must not be empty"));
        }
        if self.sets <= 0 {
            messages.push(format!("{label}: sets must be positive, got {}", self.sets));
        }
        if let Some(reps) = self.reps {
            if reps < 0 {
                messages.push(format!("{label}: reps must not be negative, got {reps}"));
            }
        }
        if let Some(duration_seconds) = self.duration_seconds {
            if duration_seconds < 0 {
                messages.push(format!(
                    "{label}: duration seconds must not be negative, got {duration_seconds}"
                ));
            }
        }
        // SQLite binds NaN as NULL which would silently turn Some into None
        if let Some(weight) = self.weight {
            if !weight.is_finite() {
                messages.push(format!("{label}: weight must be a finite number"));
            }
        }

        messages
    }
}
