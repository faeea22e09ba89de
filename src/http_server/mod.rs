//! # HTTP Server Module
//!
//! Binds the resource handlers to HTTP routes and renders their results
//! as JSON.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/course`, `/api/course/:course_id` - Courses
//! - `/api/student`, `/api/student/:student_id` - Students
//! - `/api/student/:student_id/course[/:course_id]` - Enrollments

pub mod config;
mod course_routes;
mod enrollment_routes;
mod extract;
mod observability_routes;
pub mod server;
mod student_routes;

pub use config::HttpServerConfig;
pub use server::{build_router, ApiState, HttpServer};
