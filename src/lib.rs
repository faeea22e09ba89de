//! course-api - CRUD service for courses, students and enrollments
//!
//! Layers, leaves first:
//! - [`storage`]: SQLite tables and per-table queries
//! - [`api`]: argument parsing, validation and the resource handlers
//! - [`http_server`]: axum routes and server bootstrap
//! - [`cli`]: `init` and `serve` commands

pub mod api;
pub mod cli;
pub mod http_server;
pub mod storage;
