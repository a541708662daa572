use exemplar::Model;
use sea_query::enum_def;
use shared::model::{NewWorkoutEntry, WorkoutEntry};

#[derive(Debug, Clone, PartialEq, Model)]
#[table("workout_entries")]
#[check("../../../migrations/01-workouts/up.sql")]
#[enum_def(table_name = "workout_entries")]
pub struct WorkoutEntryRow {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

impl From<WorkoutEntryRow> for WorkoutEntry {
    fn from(row: WorkoutEntryRow) -> Self {
        Self {
            id: row.id,
            workout_id: row.workout_id,
            exercise_name: row.exercise_name,
            sets: row.sets,
            reps: row.reps,
            duration_seconds: row.duration_seconds,
            weight: row.weight,
            notes: row.notes,
            order_index: row.order_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Model)]
#[table("workout_entries")]
#[check("../../../migrations/01-workouts/up.sql")]
pub struct NewWorkoutEntryRow {
    pub workout_id: i64,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

impl NewWorkoutEntryRow {
    pub fn new(workout_id: i64, entry: &NewWorkoutEntry, order_index: i32) -> Self {
        Self {
            workout_id,
            exercise_name: entry.exercise_name.clone(),
            sets: entry.sets,
            reps: entry.reps,
            duration_seconds: entry.duration_seconds,
            weight: entry.weight,
            notes: entry.notes.clone(),
            order_index,
        }
    }

    /// The stored entry once the insert has produced `id`
    pub fn into_entry(self, id: i64) -> WorkoutEntry {
        WorkoutEntry {
            id,
            workout_id: self.workout_id,
            exercise_name: self.exercise_name,
            sets: self.sets,
            reps: self.reps,
            duration_seconds: self.duration_seconds,
            weight: self.weight,
            notes: self.notes,
            order_index: self.order_index,
        }
    }
}
