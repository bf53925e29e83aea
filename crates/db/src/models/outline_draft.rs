//! Per-editor outline draft model and request types.

use atrium_core::outline::OutlineContent;
use atrium_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A draft row from the `outline_drafts` table.
///
/// At most one exists per (course, editor) pair; saving again replaces
/// the content in place.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OutlineDraft {
    pub id: DbId,
    pub course_id: DbId,
    pub editor_id: DbId,
    pub content: Json<OutlineContent>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for saving a draft.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveDraftRequest {
    pub editor_id: DbId,
    pub content: OutlineContent,
}

/// Query parameters for reading a draft back.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftQuery {
    pub editor_id: DbId,
}
