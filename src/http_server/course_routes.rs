//! Course HTTP Routes
//!
//! - `POST /course`
//! - `GET|PUT|DELETE /course/:course_id`

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};

use super::extract::{Args, IdPath};
use super::server::ApiState;
use crate::api::{self, ApiError, MessageResponse};
use crate::storage::Course;

/// Create course routes
pub fn course_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/course", post(create_course_handler))
        .route(
            "/course/:course_id",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
        .with_state(state)
}

async fn create_course_handler(
    State(state): State<Arc<ApiState>>,
    Args(args): Args,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let course = api::course::create(&state.store, &args).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

async fn get_course_handler(
    State(state): State<Arc<ApiState>>,
    IdPath(course_id): IdPath<i64>,
) -> Result<Json<Course>, ApiError> {
    Ok(Json(api::course::get(&state.store, course_id).await?))
}

async fn update_course_handler(
    State(state): State<Arc<ApiState>>,
    IdPath(course_id): IdPath<i64>,
    Args(args): Args,
) -> Result<Json<Course>, ApiError> {
    Ok(Json(api::course::update(&state.store, course_id, &args).await?))
}

async fn delete_course_handler(
    State(state): State<Arc<ApiState>>,
    IdPath(course_id): IdPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    Ok(Json(api::course::delete(&state.store, course_id).await?))
}
