#![allow(dead_code)]

use std::{path::PathBuf, time::Duration};

use rusqlite::Connection;
use server::db;
use shared::model::{NewWorkout, NewWorkoutEntry};
use tempfile::TempDir;

pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// A migrated database file that lives as long as the value
pub struct TestDb {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("workouts.sqlite");
        db::run_migrations(path.to_str().expect("utf8 path")).expect("run_migrations");
        Self { _dir: dir, path }
    }

    pub fn connect(&self) -> Connection {
        db::open_connection(&self.path, BUSY_TIMEOUT).expect("open_connection")
    }

    pub fn connection_string(&self) -> &str {
        self.path.to_str().expect("utf8 path")
    }
}

pub fn count(conn: &Connection, sql: &str, id: i64) -> i64 {
    conn.query_row(sql, [id], |row| row.get(0)).expect("count query")
}

pub fn entry_count(conn: &Connection, workout_id: i64) -> i64 {
    count(
        conn,
        "SELECT COUNT(*) FROM workout_entries WHERE workout_id = ?1",
        workout_id,
    )
}

pub fn workout_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM workouts", [], |row| row.get(0))
        .expect("count query")
}

/// Makes any insert of an entry named "Explode" abort with an SQLite error
pub fn reject_explode_entries(conn: &Connection) {
    conn.execute_batch(
        "CREATE TRIGGER reject_explode BEFORE INSERT ON workout_entries
         WHEN NEW.exercise_name = 'Explode'
         BEGIN SELECT RAISE(ABORT, 'injected failure'); END;",
    )
    .unwrap();
}

pub fn entry(
    exercise_name: &str,
    sets: i32,
    reps: Option<i32>,
    weight: Option<f64>,
    notes: &str,
    order_index: Option<i32>,
) -> NewWorkoutEntry {
    NewWorkoutEntry {
        exercise_name: exercise_name.to_owned(),
        sets,
        reps,
        duration_seconds: None,
        weight,
        notes: notes.to_owned(),
        order_index,
    }
}

pub fn pull_workout() -> NewWorkout {
    NewWorkout {
        title: "Pull Day - Back & Biceps".to_owned(),
        description: "Upper body pull workout targeting back and biceps".to_owned(),
        duration_minutes: 80,
        calories_burned: 320,
        entries: vec![
            entry("Deadlift", 5, Some(5), Some(225.0), "Focus on form, hip hinge movement", Some(1)),
            entry("Pull-ups", 4, Some(8), None, "Full range of motion, control the negative", Some(2)),
            entry("Barbell Rows", 4, Some(10), Some(135.0), "Pull to lower chest", Some(3)),
            entry("Hammer Curls", 3, Some(12), Some(30.0), "Keep elbows stationary", Some(4)),
        ],
    }
}

pub fn invalid_workout() -> NewWorkout {
    NewWorkout {
        title: String::new(),
        description: "This workout should fail validation".to_owned(),
        duration_minutes: -10,
        calories_burned: 0,
        entries: vec![NewWorkoutEntry {
            exercise_name: "Sun Salutation A".to_owned(),
            sets: 5,
            reps: Some(6),
            duration_seconds: Some(60),
            weight: None,
            notes: "Flow with breath".to_owned(),
            order_index: Some(1),
        }],
    }
}
