//! Student handlers

use super::errors::{ApiError, ApiResult};
use super::parser::RequestArgs;
use super::{commit_write, MessageResponse};
use crate::storage::{student, NewStudent, Store, Student};

const NOT_FOUND: &str = "Student not found";

/// Create a student from `first_name`, `last_name` and `roll_number`.
pub async fn create(store: &Store, args: &RequestArgs) -> ApiResult<Student> {
    let first_name = args.required_str("first_name", Some("First Name is required"))?;
    let last_name = args.required_str("last_name", None)?;
    let roll_number = args.required_str("roll_number", Some("Roll Number is required"))?;

    let Some(roll_number) = roll_number.filter(|roll| !roll.is_empty()) else {
        return Err(ApiError::validation("STUDENT001", "Roll Number is required"));
    };

    let mut tx = store.begin_write().await?;

    if student::find_by_roll_number(&mut tx, &roll_number)
        .await?
        .is_some()
    {
        tracing::info!(roll_number = %roll_number, "duplicate roll number");
        return Err(ApiError::Conflict("Roll Number already exists"));
    }

    let new = NewStudent {
        first_name,
        last_name,
        roll_number: Some(roll_number),
    };
    let written = student::insert(&mut tx, &new).await;
    let created = commit_write(tx, written, |_| {
        ApiError::validation("STUDENT002", "First Name is required")
    })
    .await?;

    tracing::info!(student_id = created.student_id, "student created");
    Ok(created)
}

pub async fn get(store: &Store, student_id: i64) -> ApiResult<Student> {
    let mut tx = store.begin().await?;
    student::find(&mut tx, student_id)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// Overwrite `first_name`, `last_name` and `roll_number`. An omitted roll
/// number is written as NULL, which the table rejects.
pub async fn update(store: &Store, student_id: i64, args: &RequestArgs) -> ApiResult<Student> {
    let values = NewStudent {
        first_name: args.required_str("first_name", None)?,
        last_name: args.required_str("last_name", None)?,
        roll_number: args.optional_str("roll_number")?,
    };

    let mut tx = store.begin_write().await?;
    if student::find(&mut tx, student_id).await?.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    let written = student::update(&mut tx, student_id, &values).await;
    let updated = commit_write(tx, written, ApiError::from)
        .await?
        .ok_or(ApiError::NotFound(NOT_FOUND))?;

    tracing::info!(student_id, "student updated");
    Ok(updated)
}

pub async fn delete(store: &Store, student_id: i64) -> ApiResult<MessageResponse> {
    let mut tx = store.begin_write().await?;
    if student::find(&mut tx, student_id).await?.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }

    let written = student::delete(&mut tx, student_id).await;
    commit_write(tx, written, ApiError::from).await?;

    tracing::info!(student_id, "student deleted");
    Ok(MessageResponse::new("Successfully Deleted"))
}
