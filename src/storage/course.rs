//! Queries against the `course` table.

use sqlx::SqliteConnection;

use super::errors::StorageResult;
use super::models::{Course, NewCourse};

const COLUMNS: &str = "course_id, course_name, course_code, course_description";

pub async fn find(conn: &mut SqliteConnection, course_id: i64) -> StorageResult<Option<Course>> {
    let course = sqlx::query_as::<_, Course>(&format!(
        "SELECT {COLUMNS} FROM course WHERE course_id = ?"
    ))
    .bind(course_id)
    .fetch_optional(conn)
    .await?;
    Ok(course)
}

pub async fn find_by_code(
    conn: &mut SqliteConnection,
    course_code: &str,
) -> StorageResult<Option<Course>> {
    let course = sqlx::query_as::<_, Course>(&format!(
        "SELECT {COLUMNS} FROM course WHERE course_code = ? ORDER BY course_id LIMIT 1"
    ))
    .bind(course_code)
    .fetch_optional(conn)
    .await?;
    Ok(course)
}

/// Insert a course and return the stored row.
pub async fn insert(conn: &mut SqliteConnection, new: &NewCourse) -> StorageResult<Course> {
    let result = sqlx::query(
        "INSERT INTO course (course_name, course_code, course_description) VALUES (?, ?, ?)",
    )
    .bind(&new.course_name)
    .bind(&new.course_code)
    .bind(&new.course_description)
    .execute(&mut *conn)
    .await?;

    let course_id = result.last_insert_rowid();
    let course = sqlx::query_as::<_, Course>(&format!(
        "SELECT {COLUMNS} FROM course WHERE course_id = ?"
    ))
    .bind(course_id)
    .fetch_one(conn)
    .await?;
    Ok(course)
}

/// Overwrite every mutable column. Returns `None` if the row is gone.
pub async fn update(
    conn: &mut SqliteConnection,
    course_id: i64,
    values: &NewCourse,
) -> StorageResult<Option<Course>> {
    let result = sqlx::query(
        "UPDATE course SET course_name = ?, course_code = ?, course_description = ? \
         WHERE course_id = ?",
    )
    .bind(&values.course_name)
    .bind(&values.course_code)
    .bind(&values.course_description)
    .bind(course_id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    find(conn, course_id).await
}

/// Returns false if there was nothing to delete.
pub async fn delete(conn: &mut SqliteConnection, course_id: i64) -> StorageResult<bool> {
    let result = sqlx::query("DELETE FROM course WHERE course_id = ?")
        .bind(course_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
