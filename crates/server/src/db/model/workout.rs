use exemplar::Model;
use sea_query::enum_def;
use shared::model::{NewWorkout, Workout, WorkoutEntry};

#[derive(Debug, Clone, PartialEq, Model)]
#[table("workouts")]
#[check("../../../migrations/01-workouts/up.sql")]
#[enum_def(table_name = "workouts")]
pub struct WorkoutRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
}

impl WorkoutRow {
    pub fn into_workout(self, entries: Vec<WorkoutEntry>) -> Workout {
        Workout {
            id: self.id,
            title: self.title,
            description: self.description,
            duration_minutes: self.duration_minutes,
            calories_burned: self.calories_burned,
            entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Model)]
#[table("workouts")]
#[check("../../../migrations/01-workouts/up.sql")]
pub struct NewWorkoutRow {
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
}

impl From<&NewWorkout> for NewWorkoutRow {
    fn from(workout: &NewWorkout) -> Self {
        Self {
            title: workout.title.clone(),
            description: workout.description.clone(),
            duration_minutes: workout.duration_minutes,
            calories_burned: workout.calories_burned,
        }
    }
}
