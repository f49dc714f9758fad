//! SQL data access layer for tasks.
//!
//! All methods take a `&Connection` parameter and are stateless — pure
//! functions that translate between Rust types and SQL. Each method issues
//! exactly one write statement, so there is never a partial-write state to
//! roll back; racing writes rely on `SQLite`'s single-statement atomicity.

use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::errors::Result;
use crate::types::{Task, TaskUpdate};

/// Get current UTC timestamp as an RFC 3339 string.
///
/// Microsecond precision so that back-to-back mutations still produce
/// strictly increasing `updated_at` values, and fixed width so that
/// lexicographic order stays chronological.
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Map a `SELECT id, title, description, completed, created_at, updated_at`
/// row onto a [`Task`].
fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

const TASK_COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

/// Task repository for SQL CRUD operations — stateless, every method
/// takes `&Connection`.
pub struct TaskRepository;

impl TaskRepository {
    /// Insert a new task with `completed = false` and
    /// `created_at = updated_at = now`. Returns the assigned id.
    ///
    /// The title is persisted verbatim; rejecting empty titles is the
    /// caller's contract.
    pub fn create(conn: &Connection, title: &str, description: &str) -> Result<i64> {
        let now = now_iso();
        let _ = conn.execute(
            "INSERT INTO tasks (title, description, completed, created_at, updated_at)
             VALUES (?1, ?2, 0, ?3, ?3)",
            params![title, description, now],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Get a task by id, or `None` if absent.
    pub fn get(conn: &Connection, id: i64) -> Result<Option<Task>> {
        let task = conn
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                params![id],
                task_from_row,
            )
            .optional()?;
        Ok(task)
    }

    /// List every task, most recently created first.
    ///
    /// Ties on `created_at` break by `id` descending for determinism.
    /// The result is a snapshot — later mutations do not change it.
    pub fn list_all(conn: &Connection) -> Result<Vec<Task>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at DESC, id DESC"
        ))?;
        let tasks = stmt
            .query_map([], task_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Apply a field subset to a task. Returns whether a row was targeted.
    ///
    /// Only fields supplied in `updates` appear in the SET clause —
    /// unsupplied fields are never reset. A successful match always
    /// refreshes `updated_at`, even when the new values equal the old
    /// ones. An empty subset performs no write and returns `false`.
    pub fn update(conn: &Connection, id: i64, updates: &TaskUpdate) -> Result<bool> {
        // Build dynamic SET clause
        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(ref title) = updates.title {
            sets.push("title = ?");
            values.push(Box::new(title.clone()));
        }
        if let Some(ref desc) = updates.description {
            sets.push("description = ?");
            values.push(Box::new(desc.clone()));
        }
        if let Some(completed) = updates.completed {
            sets.push("completed = ?");
            values.push(Box::new(completed));
        }

        if sets.is_empty() {
            // No updates to apply.
            return Ok(false);
        }

        sets.push("updated_at = ?");
        values.push(Box::new(now_iso()));
        values.push(Box::new(id));

        let sql = format!("UPDATE tasks SET {} WHERE id = ?", sets.join(", "));
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            values.iter().map(AsRef::as_ref).collect();
        let changed = conn.execute(&sql, params_refs.as_slice())?;

        Ok(changed > 0)
    }

    /// Flip the completion flag and refresh `updated_at` in a single
    /// statement. Returns whether a row was targeted.
    pub fn toggle(conn: &Connection, id: i64) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE tasks SET completed = NOT completed, updated_at = ?1 WHERE id = ?2",
            params![now_iso(), id],
        )?;
        Ok(changed > 0)
    }

    /// Delete a task by id. Returns whether a row was deleted.
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
