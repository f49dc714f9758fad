//! Public task store facade.
//!
//! [`TaskStore`] owns the connection pool and exposes the task lifecycle.
//! It is constructed explicitly and handed to whatever layer needs it —
//! there is no ambient global instance. Each operation checks one pooled
//! connection out at entry and releases it on every exit path (RAII),
//! then delegates to the stateless [`TaskRepository`].
//!
//! Not-found is a normal outcome: `get` returns `None` and the mutating
//! operations return `false` for a missing id. The only error class is
//! storage unavailability.

use std::path::Path;

use tracing::debug;

use crate::connection::{ConnectionConfig, ConnectionPool, new_file};
use crate::errors::Result;
use crate::migrations::run_migrations;
use crate::repository::TaskRepository;
use crate::types::{Task, TaskUpdate};

/// SQLite-backed task store.
pub struct TaskStore {
    pool: ConnectionPool,
}

impl TaskStore {
    /// Open (or create) the database at `path` with default pool settings.
    ///
    /// The schema is not touched here; call [`initialize`](Self::initialize)
    /// once at process start.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, &ConnectionConfig::default())
    }

    /// Open (or create) the database at `path` with explicit pool settings.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: &ConnectionConfig) -> Result<Self> {
        let pool = new_file(path, config)?;
        Ok(Self { pool })
    }

    /// Ensure the backing schema exists.
    ///
    /// Idempotent — safe to call on every process start, never destroys
    /// existing data.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.pool.get()?;
        let _ = run_migrations(&conn)?;
        Ok(())
    }

    /// Insert a new task and return its id.
    ///
    /// `completed` starts false and `created_at == updated_at`. The title
    /// is persisted verbatim; validating non-emptiness is the caller's
    /// contract.
    pub fn create(&self, title: &str, description: &str) -> Result<i64> {
        let conn = self.pool.get()?;
        let id = TaskRepository::create(&conn, title, description)?;
        debug!(id, "task created");
        Ok(id)
    }

    /// Return a snapshot of every task, most recently created first.
    pub fn list_all(&self) -> Result<Vec<Task>> {
        let conn = self.pool.get()?;
        TaskRepository::list_all(&conn)
    }

    /// Return the task with this id, or `None` if absent.
    pub fn get(&self, id: i64) -> Result<Option<Task>> {
        let conn = self.pool.get()?;
        TaskRepository::get(&conn, id)
    }

    /// Apply a field subset to a task. Returns whether a row was targeted.
    ///
    /// Unsupplied fields are left unchanged; an empty subset performs no
    /// write and returns `false`.
    pub fn update(&self, id: i64, updates: &TaskUpdate) -> Result<bool> {
        let conn = self.pool.get()?;
        let matched = TaskRepository::update(&conn, id, updates)?;
        debug!(id, matched, "task updated");
        Ok(matched)
    }

    /// Flip a task's completion flag. Returns whether a row was targeted.
    pub fn toggle(&self, id: i64) -> Result<bool> {
        let conn = self.pool.get()?;
        let matched = TaskRepository::toggle(&conn, id)?;
        debug!(id, matched, "task toggled");
        Ok(matched)
    }

    /// Permanently remove a task. Returns whether a row was deleted.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.pool.get()?;
        let deleted = TaskRepository::delete(&conn, id)?;
        debug!(id, deleted, "task deleted");
        Ok(deleted)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
