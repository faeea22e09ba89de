//! Relational storage for courses, students and enrollments
//!
//! All state lives in a single SQLite database with three tables. Handlers
//! never touch the pool directly: they open a transaction with
//! [`Store::begin`] (reads) or [`Store::begin_write`] (check-then-write)
//! and pass its connection to the per-table query functions in
//! [`course`], [`student`] and [`enrollment`].
//!
//! Foreign keys are declared on `enrollment` but not enforced, so deleting
//! a course or student leaves its enrollments in place.

pub mod course;
pub mod enrollment;
mod errors;
mod models;
pub mod student;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

pub use errors::{StorageError, StorageResult};
pub use models::{Course, Enrollment, NewCourse, NewStudent, Student};

/// Transaction handed to the query functions.
pub type StoreTx = Transaction<'static, Sqlite>;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS course (
        course_id INTEGER PRIMARY KEY AUTOINCREMENT,
        course_name TEXT NOT NULL,
        course_code TEXT NOT NULL UNIQUE,
        course_description TEXT
    )",
    "CREATE TABLE IF NOT EXISTS student (
        student_id INTEGER PRIMARY KEY AUTOINCREMENT,
        roll_number TEXT NOT NULL UNIQUE,
        first_name TEXT NOT NULL,
        last_name TEXT
    )",
    "CREATE TABLE IF NOT EXISTS enrollment (
        enrollment_id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER NOT NULL REFERENCES student (student_id),
        course_id INTEGER NOT NULL REFERENCES course (course_id)
    )",
];

/// Handle to the backing database, shared by every request.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating if missing) the database file at `path`.
    pub async fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool
    /// is pinned to one connection that is never recycled.
    pub async fn in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Create the three tables if they do not exist yet.
    pub async fn init_schema(&self) -> StorageResult<()> {
        let mut tx = self.begin_write().await?;
        for statement in SCHEMA {
            sqlx::query(*statement).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// Begin a transaction. Dropping it without calling `commit` rolls back.
    pub async fn begin(&self) -> StorageResult<StoreTx> {
        Ok(self.pool.begin().await?)
    }

    /// Begin a transaction that holds the write lock from its first
    /// statement.
    ///
    /// A deferred transaction that reads before writing cannot upgrade its
    /// snapshot once another connection has committed, and fails with
    /// `SQLITE_BUSY` instead of waiting. Taking the lock up front makes
    /// concurrent writers queue on the busy timeout.
    pub async fn begin_write(&self) -> StorageResult<StoreTx> {
        Ok(self.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
pub(crate) async fn test_store() -> Store {
    let store = Store::in_memory().await.unwrap();
    store.init_schema().await.unwrap();
    store
}
