//! Student HTTP Routes
//!
//! - `POST /student`
//! - `GET|PUT|DELETE /student/:student_id`

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};

use super::extract::{Args, IdPath};
use super::server::ApiState;
use crate::api::{self, ApiError, MessageResponse};
use crate::storage::Student;

/// Create student routes
pub fn student_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/student", post(create_student_handler))
        .route(
            "/student/:student_id",
            get(get_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
        .with_state(state)
}

async fn create_student_handler(
    State(state): State<Arc<ApiState>>,
    Args(args): Args,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let student = api::student::create(&state.store, &args).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

async fn get_student_handler(
    State(state): State<Arc<ApiState>>,
    IdPath(student_id): IdPath<i64>,
) -> Result<Json<Student>, ApiError> {
    Ok(Json(api::student::get(&state.store, student_id).await?))
}

async fn update_student_handler(
    State(state): State<Arc<ApiState>>,
    IdPath(student_id): IdPath<i64>,
    Args(args): Args,
) -> Result<Json<Student>, ApiError> {
    Ok(Json(
        api::student::update(&state.store, student_id, &args).await?,
    ))
}

async fn delete_student_handler(
    State(state): State<Arc<ApiState>>,
    IdPath(student_id): IdPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    Ok(Json(api::student::delete(&state.store, student_id).await?))
}
