//! Version-ledger models and restore request type.

use atrium_core::outline::OutlineContent;
use atrium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// An immutable snapshot row from the `outline_versions` table.
///
/// `version_number` is the 1-based chronological rank of the publish that
/// created it; the content is a frozen copy, independent of any later
/// edit to the current outline.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutlineVersion {
    pub id: DbId,
    pub course_id: DbId,
    pub version_number: i32,
    pub content: Json<OutlineContent>,
    pub total_hours: f64,
    pub editor_id: DbId,
    pub published_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for restoring an older version.
#[derive(Debug, Clone, Deserialize)]
pub struct RestoreVersionRequest {
    pub editor_id: DbId,
}
