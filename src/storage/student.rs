//! Queries against the `student` table.

use sqlx::SqliteConnection;

use super::errors::StorageResult;
use super::models::{NewStudent, Student};

const COLUMNS: &str = "student_id, first_name, last_name, roll_number";

pub async fn find(conn: &mut SqliteConnection, student_id: i64) -> StorageResult<Option<Student>> {
    let student = sqlx::query_as::<_, Student>(&format!(
        "SELECT {COLUMNS} FROM student WHERE student_id = ?"
    ))
    .bind(student_id)
    .fetch_optional(conn)
    .await?;
    Ok(student)
}

pub async fn find_by_roll_number(
    conn: &mut SqliteConnection,
    roll_number: &str,
) -> StorageResult<Option<Student>> {
    let student = sqlx::query_as::<_, Student>(&format!(
        "SELECT {COLUMNS} FROM student WHERE roll_number = ? ORDER BY student_id LIMIT 1"
    ))
    .bind(roll_number)
    .fetch_optional(conn)
    .await?;
    Ok(student)
}

pub async fn insert(conn: &mut SqliteConnection, new: &NewStudent) -> StorageResult<Student> {
    let result = sqlx::query(
        "INSERT INTO student (first_name, last_name, roll_number) VALUES (?, ?, ?)",
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.roll_number)
    .execute(&mut *conn)
    .await?;

    let student = sqlx::query_as::<_, Student>(&format!(
        "SELECT {COLUMNS} FROM student WHERE student_id = ?"
    ))
    .bind(result.last_insert_rowid())
    .fetch_one(conn)
    .await?;
    Ok(student)
}

pub async fn update(
    conn: &mut SqliteConnection,
    student_id: i64,
    values: &NewStudent,
) -> StorageResult<Option<Student>> {
    let result = sqlx::query(
        "UPDATE student SET first_name = ?, last_name = ?, roll_number = ? WHERE student_id = ?",
    )
    .bind(&values.first_name)
    .bind(&values.last_name)
    .bind(&values.roll_number)
    .bind(student_id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    find(conn, student_id).await
}

pub async fn delete(conn: &mut SqliteConnection, student_id: i64) -> StorageResult<bool> {
    let result = sqlx::query("DELETE FROM student WHERE student_id = ?")
        .bind(student_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
