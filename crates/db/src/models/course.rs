//! Course entity model and DTOs.

use atrium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    /// Human-readable course code, e.g. `ENG1D`. Unique.
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub code: String,
    pub title: String,
    pub description: Option<String>,
}

/// DTO for updating an existing course. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourse {
    pub code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}
