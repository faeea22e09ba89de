//! Course handlers

use super::errors::{ApiError, ApiResult};
use super::parser::RequestArgs;
use super::{commit_write, MessageResponse};
use crate::storage::{course, Course, NewCourse, Store};

const NOT_FOUND: &str = "Course not found";

/// Create a course from `course_name`, `course_code` and an optional
/// `course_description`.
pub async fn create(store: &Store, args: &RequestArgs) -> ApiResult<Course> {
    let course_name = args.required_str("course_name", Some("Course Name is required"))?;
    let course_code = args.required_str("course_code", Some("Course Code is required"))?;
    let course_description = args.optional_str("course_description")?;

    let Some(course_code) = course_code.filter(|code| !code.is_empty()) else {
        return Err(ApiError::validation("COURSE002", "Course Code is required"));
    };

    let mut tx = store.begin_write().await?;

    if course::find_by_code(&mut tx, &course_code).await?.is_some() {
        tracing::info!(course_code = %course_code, "duplicate course code");
        return Err(ApiError::Conflict("Course Code already exists"));
    }

    let new = NewCourse {
        course_name,
        course_code: Some(course_code),
        course_description,
    };
    let written = course::insert(&mut tx, &new).await;
    let created = commit_write(tx, written, |_| {
        ApiError::validation("COURSE001", "Course Name is required")
    })
    .await?;

    tracing::info!(course_id = created.course_id, "course created");
    Ok(created)
}

pub async fn get(store: &Store, course_id: i64) -> ApiResult<Course> {
    let mut tx = store.begin().await?;
    course::find(&mut tx, course_id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// Overwrite all three mutable fields. The code is not re-checked for
/// uniqueness; a clash is rejected by the table and surfaces as 500.
pub async fn update(store: &Store, course_id: i64, args: &RequestArgs) -> ApiResult<Course> {
    let values = NewCourse {
        course_name: args.required_str("course_name", None)?,
        course_code: args.required_str("course_code", None)?,
        course_description: args.optional_str("course_description")?,
    };

    let mut tx = store.begin_write().await?;
    if course::find(&mut tx, course_id).await?.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    let written = course::update(&mut tx, course_id, &values).await;
    let updated = commit_write(tx, written, ApiError::from)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    tracing::info!(course_id, "course updated");
    Ok(updated)
}

/// Remove a course. Its enrollments are left in place.
pub async fn delete(store: &Store, course_id: i64) -> ApiResult<MessageResponse> {
    let mut tx = store.begin_write().await?;
    if course::find(&mut tx, course_id).await?.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    let written = course::delete(&mut tx, course_id).await;
    commit_write(tx, written, ApiError::from).await?;

    tracing::info!(course_id, "course deleted");
    Ok(MessageResponse::new("Successfully Deleted"))
}
