//! Row shapes of the `workouts` and `workout_entries` tables.
//!
//! These carry no behaviour beyond mapping to and from the shared models.

mod workout;
pub use workout::*;

mod workout_entry;
pub use workout_entry::*;
