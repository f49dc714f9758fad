//! Task record and update types.
//!
//! [`Task`] is the row shape and the externally serialized shape in one:
//! callers only ever see owned copies, so there is no separate projection
//! struct. [`TaskUpdate`] wraps each mutable field in an `Option` so that
//! "not supplied" is unambiguous from "supplied as empty".

use serde::{Deserialize, Serialize};

/// A single task record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned ID. Unique, monotonically increasing, never reused.
    pub id: i64,
    /// Task title. Persisted verbatim; non-emptiness is the caller's contract.
    pub title: String,
    /// Free-form description, may be empty.
    pub description: String,
    /// Completion flag, false at creation.
    pub completed: bool,
    /// Creation timestamp (RFC 3339 UTC). Set once, immutable.
    pub created_at: String,
    /// Last-mutation timestamp (RFC 3339 UTC). Refreshed on every
    /// successful mutation; equals `created_at` at creation.
    pub updated_at: String,
}

/// Field subset for [`update`](crate::TaskStore::update).
///
/// Only fields set to `Some` are written; everything else is left
/// unchanged. An all-`None` update performs no write.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// New title, if supplied.
    pub title: Option<String>,
    /// New description, if supplied.
    pub description: Option<String>,
    /// New completion state, if supplied.
    pub completed: Option<bool>,
}

impl TaskUpdate {
    /// Whether no fields were supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
