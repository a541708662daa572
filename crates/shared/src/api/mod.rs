use const_format::concatcp;
pub mod error;
pub mod payloads;

pub const API_BASE_PATH: &str = "/api/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Health,
    Workout,
    WorkoutId,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Health => concatcp!(API_BASE_PATH, "health"),
            Workout => concatcp!(API_BASE_PATH, "workouts"),
            WorkoutId => concatcp!(API_BASE_PATH, "workouts/:id"),
        }
    }

    /// Fills in the `:id` segment of a path
    pub fn path_with_id(&self, id: i64) -> String {
        self.path().replace(":id", &id.to_string())
    }
}
