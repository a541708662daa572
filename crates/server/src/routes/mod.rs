mod health;
pub use health::*;

mod workouts;
pub use workouts::*;
