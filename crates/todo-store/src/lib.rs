//! # todo-store
//!
//! Task CRUD with `SQLite` persistence.
//!
//! [`TaskStore`] owns the canonical copy of every task and exposes the
//! create / list / get / update / toggle / delete lifecycle with
//! all-or-nothing semantics per operation. Callers receive owned
//! snapshots, never references into shared state.
//!
//! - **[`connection`]**: `r2d2` connection pool with WAL mode and
//!   performance pragmas applied to every connection.
//! - **[`migrations`]**: Version-tracked schema evolution, embedded at
//!   compile time and run transactionally.
//! - **[`repository`]**: Stateless SQL layer — each method takes
//!   `&Connection` and executes a single statement.
//! - **[`store`]**: The public facade; acquires one pooled connection
//!   per operation.

#![deny(unsafe_code)]

pub mod connection;
pub mod errors;
pub mod migrations;
pub mod repository;
pub mod store;
pub mod types;

pub use connection::{ConnectionConfig, ConnectionPool, DEFAULT_DB_PATH};
pub use errors::{Result, StoreError};
pub use store::TaskStore;
pub use types::{Task, TaskUpdate};
