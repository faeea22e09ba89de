//! Enrollment HTTP Routes
//!
//! - `GET|POST /student/:student_id/course`
//! - `DELETE /student/:student_id/course/:course_id`

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::delete, routing::get, Json, Router};

use super::extract::{Args, IdPath};
use super::server::ApiState;
use crate::api::{self, ApiError, MessageResponse};
use crate::storage::Enrollment;

/// Create enrollment routes
pub fn enrollment_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/student/:student_id/course",
            get(list_enrollments_handler).post(create_enrollment_handler),
        )
        .route(
            "/student/:student_id/course/:course_id",
            delete(delete_enrollment_handler),
        )
        .with_state(state)
}

async fn list_enrollments_handler(
    State(state): State<Arc<ApiState>>,
    IdPath(student_id): IdPath<i64>,
) -> Result<Json<Vec<Enrollment>>, ApiError> {
    Ok(Json(api::enrollment::list(&state.store, student_id).await?))
}

async fn create_enrollment_handler(
    State(state): State<Arc<ApiState>>,
    IdPath(student_id): IdPath<i64>,
    Args(args): Args,
) -> Result<(StatusCode, Json<Enrollment>), ApiError> {
    let enrollment = api::enrollment::create(&state.store, student_id, &args).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

async fn delete_enrollment_handler(
    State(state): State<Arc<ApiState>>,
    IdPath((student_id, course_id)): IdPath<(i64, i64)>,
) -> Result<Json<MessageResponse>, ApiError> {
    Ok(Json(
        api::enrollment::delete(&state.store, student_id, course_id).await?,
    ))
}
