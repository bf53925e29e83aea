//! Repository for the `outline_drafts` table.
//!
//! A draft is an editor's private in-progress copy of an outline. Drafts
//! carry no history: there is exactly zero or one per (course, editor)
//! pair, and saving again replaces the previous content.

use atrium_core::outline::OutlineContent;
use atrium_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::outline_draft::OutlineDraft;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, course_id, editor_id, content, created_at, updated_at";

/// Provides the per-editor draft upsert and lookup.
pub struct OutlineDraftRepo;

impl OutlineDraftRepo {
    /// Save an editor's draft for a course.
    ///
    /// Uses `ON CONFLICT` to upsert in a single statement -- if a draft
    /// already exists for the same course + editor, its content is
    /// replaced. Two saves from the same editor can never race into
    /// duplicate rows; the later write wins.
    pub async fn upsert(
        pool: &PgPool,
        course_id: DbId,
        editor_id: DbId,
        content: &OutlineContent,
    ) -> Result<OutlineDraft, sqlx::Error> {
        let query = format!(
            "INSERT INTO outline_drafts (course_id, editor_id, content)
             VALUES ($1, $2, $3)
             ON CONFLICT (course_id, editor_id) DO UPDATE SET
                 content = EXCLUDED.content
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OutlineDraft>(&query)
            .bind(course_id)
            .bind(editor_id)
            .bind(Json(content))
            .fetch_one(pool)
            .await
    }

    /// Find the draft owned by `editor_id` for a course.
    ///
    /// Scoped to the owning editor; another editor's draft for the same
    /// course is never visible through this lookup.
    pub async fn find(
        pool: &PgPool,
        course_id: DbId,
        editor_id: DbId,
    ) -> Result<Option<OutlineDraft>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM outline_drafts
             WHERE course_id = $1 AND editor_id = $2"
        );
        sqlx::query_as::<_, OutlineDraft>(&query)
            .bind(course_id)
            .bind(editor_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an editor's draft for a course. Returns `true` if a row was
    /// removed. Optional cleanup after publish; keeping a stale draft is
    /// also valid.
    pub async fn delete(
        pool: &PgPool,
        course_id: DbId,
        editor_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM outline_drafts WHERE course_id = $1 AND editor_id = $2")
                .bind(course_id)
                .bind(editor_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
