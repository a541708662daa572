use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{NewWorkoutEntry, WorkoutEntry};
use crate::{api::error::ValidationError, model::ValidateModel};

/// A stored workout. `entries` is always in workout order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<WorkoutEntry>,
}

/// Body of a create or full replace of a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: i32,
    #[serde(default)]
    pub calories_burned: i32,
    #[serde(default)]
    pub entries: Vec<NewWorkoutEntry>,
}

impl NewWorkout {
    /// Indices `1..=N` following the position of each entry in `entries`,
    /// ignoring any index the caller gave
    pub fn positional_indices(&self) -> Result<Vec<i32>, ValidationError> {
        (1..=self.entries.len())
            .map(|position| {
                i32::try_from(position).map_err(|_| {
                    ValidationError::new(format!("too many entries ({})", self.entries.len()))
                })
            })
            .collect()
    }

    /// Works out the order index each entry will be stored with on create, in
    /// the same order as `entries`
    pub fn order_indices(&self) -> Result<Vec<i32>, ValidationError> {
        let explicit = self
            .entries
            .iter()
            .filter(|e| e.order_index.is_some())
            .count();

        if explicit == 0 {
            return self.positional_indices();
        }

        if explicit != self.entries.len() {
            return Err(ValidationError::new(
                "order index must be given for every entry or for none",
            ));
        }

        let mut seen = HashSet::with_capacity(self.entries.len());
        let mut messages = Vec::new();
        let mut indices = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let Some(index) = entry.order_index else {
                continue;
            };
            if index <= 0 {
                messages.push(format!("order index must be positive, got {index}"));
            } else if !seen.insert(index) {
                messages.push(format!("duplicate order index {index}"));
            }
            indices.push(index);
        }

        if messages.is_empty() {
            Ok(indices)
        } else {
            Err(ValidationError {
                error_messages: messages,
            })
        }
    }
}

impl ValidateModel for NewWorkout {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut messages = Vec::new();

        if self.title.trim().is_empty() {
            messages.push("title must not be empty".to_owned());
        }
        if self.duration_minutes < 0 {
            messages.push(format!(
                "duration minutes must not be negative, got {}",
                self.duration_minutes
            ));
        }
        if self.calories_burned < 0 {
            messages.push(format!(
                "calories burned must not be negative, got {}",
                self.calories_burned
            ));
        }

        for (position, entry) in self.entries.iter().enumerate() {
            messages.extend(entry.validation_messages(position));
        }

        if let Err(e) = self.order_indices() {
            messages.extend(e.error_messages);
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                error_messages: messages,
            })
        }
    }
}
