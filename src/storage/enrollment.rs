//! Queries against the `enrollment` join table.

use sqlx::SqliteConnection;

use super::errors::StorageResult;
use super::models::Enrollment;

pub async fn list_for_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> StorageResult<Vec<Enrollment>> {
    let enrollments = sqlx::query_as::<_, Enrollment>(
        "SELECT enrollment_id, student_id, course_id FROM enrollment \
         WHERE student_id = ? ORDER BY enrollment_id",
    )
    .bind(student_id)
    .fetch_all(conn)
    .await?;
    Ok(enrollments)
}

/// Insert a join record. Existence of the parents is the caller's concern.
pub async fn insert(
    conn: &mut SqliteConnection,
    student_id: i64,
    course_id: i64,
) -> StorageResult<Enrollment> {
    let result = sqlx::query("INSERT INTO enrollment (student_id, course_id) VALUES (?, ?)")
        .bind(student_id)
        .bind(course_id)
        .execute(&mut *conn)
        .await?;

    Ok(Enrollment {
        enrollment_id: result.last_insert_rowid(),
        student_id,
        course_id,
    })
}

/// Delete the oldest enrollment matching the pair. Returns the removed row.
pub async fn delete_first(
    conn: &mut SqliteConnection,
    student_id: i64,
    course_id: i64,
) -> StorageResult<Option<Enrollment>> {
    let first = sqlx::query_as::<_, Enrollment>(
        "SELECT enrollment_id, student_id, course_id FROM enrollment \
         WHERE student_id = ? AND course_id = ? ORDER BY enrollment_id LIMIT 1",
    )
    .bind(student_id)
    .bind(course_id)
    .fetch_optional(&mut *conn)
    .await?;

    let Some(enrollment) = first else {
        return Ok(None);
    };

    sqlx::query("DELETE FROM enrollment WHERE enrollment_id = ?")
        .bind(enrollment.enrollment_id)
        .execute(conn)
        .await?;
    Ok(Some(enrollment))
}
