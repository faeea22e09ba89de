//! Enrollment handlers
//!
//! Enrollments are addressed through the student that owns them. Parent
//! existence is only checked when an enrollment is created.

use axum::http::StatusCode;

use super::errors::{ApiError, ApiResult};
use super::parser::RequestArgs;
use super::{commit_write, MessageResponse};
use crate::storage::{course, enrollment, student, Enrollment, Store};

/// All enrollments of a student, oldest first.
///
/// An unknown student and a student with no enrollments both report the
/// same not-found error.
pub async fn list(store: &Store, student_id: i64) -> ApiResult<Vec<Enrollment>> {
    let mut tx = store.begin().await?;
    let enrollments = enrollment::list_for_student(&mut tx, student_id).await?;

    if enrollments.is_empty() {
        return Err(ApiError::NotFound("Student is not enrolled in any course"));
    }
    Ok(enrollments)
}

/// Enroll a student in the course named by `course_id`. Duplicate
/// enrollments are allowed.
pub async fn create(store: &Store, student_id: i64, args: &RequestArgs) -> ApiResult<Enrollment> {
    let course_id = args.required_int("course_id", None)?;

    let mut tx = store.begin_write().await?;

    let course_exists = match course_id {
        Some(id) => course::find(&mut tx, id).await?.is_some(),
        None => false,
    };
    let Some(course_id) = course_id.filter(|_| course_exists) else {
        return Err(ApiError::reference("ENROLLMENT001", "Course does not exist"));
    };

    if student::find(&mut tx, student_id).await?.is_none() {
        return Err(ApiError::reference("ENROLLMENT002", "Student does not exist"));
    }

    let written = enrollment::insert(&mut tx, student_id, course_id).await;
    let created = commit_write(tx, written, |_| {
        ApiError::commit(
            "ENROLLMENT003",
            "Enrollment failed",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    })
    .await?;

    tracing::info!(
        enrollment_id = created.enrollment_id,
        student_id,
        course_id,
        "student enrolled"
    );
    Ok(created)
}

/// Remove the oldest enrollment of `student_id` in `course_id`.
pub async fn delete(store: &Store, student_id: i64, course_id: i64) -> ApiResult<MessageResponse> {
    let mut tx = store.begin_write().await?;
    let written = enrollment::delete_first(&mut tx, student_id, course_id).await;

    match commit_write(tx, written, ApiError::from).await? {
        Some(removed) => {
            tracing::info!(enrollment_id = removed.enrollment_id, "enrollment deleted");
            Ok(MessageResponse::new("Successfully deleted"))
        }
        None => Err(ApiError::NotFound("Enrollment for the student not found")),
    }
}
