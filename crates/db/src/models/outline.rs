//! Current-outline model and publish request types.
//!
//! `outline_current` holds the single published outline per course. Its
//! content always mirrors the most recent row in `outline_versions` --
//! both are written in one transaction by
//! [`crate::repositories::OutlineRepo::publish`].

use atrium_core::outline::OutlineContent;
use atrium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// An outline row from the `outline_current` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutlineRecord {
    pub id: DbId,
    pub course_id: DbId,
    pub content: Json<OutlineContent>,
    /// Derived at publish time from the unit and final-assessment hour
    /// counts; never accepted from the caller.
    pub total_hours: f64,
    pub updated_by_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for publishing an outline.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishOutlineRequest {
    pub editor_id: DbId,
    pub content: OutlineContent,
}
