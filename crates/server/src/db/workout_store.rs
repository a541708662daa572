//! Persistence of the workout aggregate.
//!
//! A workout and its entries are written and removed together inside one
//! transaction, so no reader ever sees a workout row without its entries or
//! entries without their workout. Any early return drops the open
//! [`Transaction`], which rolls it back.

use exemplar::Model;
use rusqlite::{Connection, OptionalExtension, Transaction, TransactionBehavior};
use sea_query::{Expr, Order, Query, SqliteQueryBuilder};
use sea_query_rusqlite::RusqliteBinder;
use shared::model::{NewWorkout, NewWorkoutEntry, ValidateModel, Workout, WorkoutEntry};
use tracing::{debug, instrument};

use super::{
    model::{
        NewWorkoutEntryRow, NewWorkoutRow, WorkoutEntryRow, WorkoutEntryRowIden, WorkoutRow,
        WorkoutRowIden,
    },
    PersistenceError, StoreError,
};

/// Stores a new workout with all of its entries.
///
/// The returned workout matches `new_workout` with identities filled in and
/// entries in the order they were submitted.
#[instrument(skip(conn, new_workout), fields(title = %new_workout.title, entries = new_workout.entries.len()))]
pub fn create_workout(conn: &mut Connection, new_workout: &NewWorkout) -> Result<Workout, StoreError> {
    new_workout.validate()?;
    let order_indices = new_workout.order_indices()?;

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let workout = {
        NewWorkoutRow::from(new_workout).insert(&tx)?;
        let id = tx.last_insert_rowid();
        let entries = insert_entries(&tx, id, &new_workout.entries, &order_indices)?;

        Workout {
            id,
            title: new_workout.title.clone(),
            description: new_workout.description.clone(),
            duration_minutes: new_workout.duration_minutes,
            calories_burned: new_workout.calories_burned,
            entries,
        }
    };
    tx.commit()?;

    debug!(id = workout.id, "Created workout");
    Ok(workout)
}

/// Loads a workout with its entries sorted by order index
#[instrument(skip(conn))]
pub fn get_workout_by_id(conn: &mut Connection, id: i64) -> Result<Workout, StoreError> {
    if id <= 0 {
        return Err(StoreError::NotFound { id });
    }

    // Both reads share one snapshot
    let tx = conn.transaction()?;
    let workout = fetch_workout(&tx, id)?.ok_or(StoreError::NotFound { id })?;
    tx.commit()?;

    Ok(workout)
}

/// Replaces the metadata and the whole entry set of an existing workout.
///
/// The new entries are numbered `1..=N` by their position in `workout.entries`;
/// order indices supplied by the caller are not kept.
#[instrument(skip(conn, workout), fields(title = %workout.title, entries = workout.entries.len()))]
pub fn update_workout_by_id(
    conn: &mut Connection,
    id: i64,
    workout: &NewWorkout,
) -> Result<(), StoreError> {
    workout.validate()?;
    let order_indices = workout.positional_indices()?;

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    if !workout_exists(&tx, id)? {
        return Err(StoreError::NotFound { id });
    }

    {
        let (sql, values) = Query::update()
            .table(WorkoutRowIden::Table)
            .values([
                (WorkoutRowIden::Title, workout.title.clone().into()),
                (WorkoutRowIden::Description, workout.description.clone().into()),
                (WorkoutRowIden::DurationMinutes, workout.duration_minutes.into()),
                (WorkoutRowIden::CaloriesBurned, workout.calories_burned.into()),
            ])
            .and_where(Expr::col(WorkoutRowIden::Id).eq(id))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = tx.prepare_cached(&sql)?;
        stmt.execute(&*values.as_params())?;
    }

    let removed = delete_entries(&tx, id)?;
    insert_entries(&tx, id, &workout.entries, &order_indices)?;
    tx.commit()?;

    debug!(removed, inserted = workout.entries.len(), "Replaced workout entries");
    Ok(())
}

/// Removes a workout and every entry it owns
#[instrument(skip(conn))]
pub fn delete_workout_by_id(conn: &mut Connection, id: i64) -> Result<(), StoreError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    if !workout_exists(&tx, id)? {
        return Err(StoreError::NotFound { id });
    }

    // The foreign key cascades too, this keeps the delete whole on connections
    // where foreign_keys is off
    let removed = delete_entries(&tx, id)?;

    {
        let (sql, values) = Query::delete()
            .from_table(WorkoutRowIden::Table)
            .and_where(Expr::col(WorkoutRowIden::Id).eq(id))
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = tx.prepare_cached(&sql)?;
        stmt.execute(&*values.as_params())?;
    }
    tx.commit()?;

    debug!(removed, "Deleted workout");
    Ok(())
}

fn workout_exists(conn: &Connection, id: i64) -> Result<bool, rusqlite::Error> {
    let (sql, values) = Query::select()
        .column(WorkoutRowIden::Id)
        .from(WorkoutRowIden::Table)
        .and_where(Expr::col(WorkoutRowIden::Id).eq(id))
        .limit(1)
        .build_rusqlite(SqliteQueryBuilder);

    let mut stmt = conn.prepare_cached(&sql)?;
    let found = stmt.query_row(&*values.as_params(), |_| Ok(())).optional()?;
    Ok(found.is_some())
}

fn fetch_workout(conn: &Connection, id: i64) -> Result<Option<Workout>, StoreError> {
    let (sql, values) = Query::select()
        .columns([
            WorkoutRowIden::Id,
            WorkoutRowIden::Title,
            WorkoutRowIden::Description,
            WorkoutRowIden::DurationMinutes,
            WorkoutRowIden::CaloriesBurned,
        ])
        .from(WorkoutRowIden::Table)
        .and_where(Expr::col(WorkoutRowIden::Id).eq(id))
        .limit(1)
        .build_rusqlite(SqliteQueryBuilder);

    let mut stmt = conn.prepare_cached(&sql)?;
    let Some(row) = stmt
        .query_row(&*values.as_params(), WorkoutRow::from_row)
        .optional()?
    else {
        return Ok(None);
    };

    let entries = fetch_entries(conn, id)?;
    Ok(Some(row.into_workout(entries)))
}

fn fetch_entries(conn: &Connection, workout_id: i64) -> Result<Vec<WorkoutEntry>, StoreError> {
    let (sql, values) = Query::select()
        .columns([
            WorkoutEntryRowIden::Id,
            WorkoutEntryRowIden::WorkoutId,
            WorkoutEntryRowIden::ExerciseName,
            WorkoutEntryRowIden::Sets,
            WorkoutEntryRowIden::Reps,
            WorkoutEntryRowIden::DurationSeconds,
            WorkoutEntryRowIden::Weight,
            WorkoutEntryRowIden::Notes,
            WorkoutEntryRowIden::OrderIndex,
        ])
        .from(WorkoutEntryRowIden::Table)
        .and_where(Expr::col(WorkoutEntryRowIden::WorkoutId).eq(workout_id))
        .order_by(WorkoutEntryRowIden::OrderIndex, Order::Asc)
        .order_by(WorkoutEntryRowIden::Id, Order::Asc)
        .build_rusqlite(SqliteQueryBuilder);

    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt
        .query_map(&*values.as_params(), WorkoutEntryRow::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    // Rows are sorted so any repeat is adjacent
    if let Some(pair) = rows.windows(2).find(|p| p[0].order_index == p[1].order_index) {
        return Err(PersistenceError::DuplicateOrderIndex {
            workout_id,
            order_index: pair[0].order_index,
        }
        .into());
    }

    Ok(rows.into_iter().map(WorkoutEntry::from).collect())
}

fn insert_entries(
    tx: &Transaction<'_>,
    workout_id: i64,
    entries: &[NewWorkoutEntry],
    order_indices: &[i32],
) -> Result<Vec<WorkoutEntry>, rusqlite::Error> {
    entries
        .iter()
        .zip(order_indices)
        .map(|(entry, &order_index)| -> Result<WorkoutEntry, rusqlite::Error> {
            let row = NewWorkoutEntryRow::new(workout_id, entry, order_index);
            row.insert(tx)?;
            Ok(row.into_entry(tx.last_insert_rowid()))
        })
        .collect()
}

fn delete_entries(tx: &Transaction<'_>, workout_id: i64) -> Result<usize, rusqlite::Error> {
    let (sql, values) = Query::delete()
        .from_table(WorkoutEntryRowIden::Table)
        .and_where(Expr::col(WorkoutEntryRowIden::WorkoutId).eq(workout_id))
        .build_rusqlite(SqliteQueryBuilder);

    let mut stmt = tx.prepare_cached(&sql)?;
    let removed = stmt.execute(&*values.as_params())?;
    Ok(removed)
}
