//! Row types for the three tables.

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `course` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Course {
    pub course_id: i64,
    pub course_name: String,
    pub course_code: String,
    pub course_description: Option<String>,
}

/// A row from the `student` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Student {
    pub student_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub roll_number: String,
}

/// A row from the `enrollment` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Enrollment {
    pub enrollment_id: i64,
    pub student_id: i64,
    pub course_id: i64,
}

/// Column values written by a course insert or update.
///
/// Fields stay optional all the way down; the NOT NULL columns reject a
/// missing value at write time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCourse {
    pub course_name: Option<String>,
    pub course_code: Option<String>,
    pub course_description: Option<String>,
}

/// Column values written by a student insert or update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub roll_number: Option<String>,
}
