//! Repository for the `outline_current` table and the publish transaction.
//!
//! Publishing is the one multi-write operation in the outline lifecycle:
//! overwrite the current outline AND append a snapshot to the version
//! ledger, atomically. Both writes run inside a single transaction that
//! holds a row lock on the course, so concurrent publishes for the same
//! course are linearized while publishes for different courses proceed
//! in parallel. Restore has no write path of its own -- callers re-invoke
//! [`OutlineRepo::publish`] with a stored version's content.

use atrium_core::outline::{self, OutlineContent};
use atrium_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::outline::OutlineRecord;
use crate::models::outline_version::OutlineVersion;
use crate::repositories::outline_version_repo::OutlineVersionRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, course_id, content, total_hours, updated_by_id, created_at, updated_at";

/// Same columns qualified for joined queries.
const JOINED_COLUMNS: &str = "o.id, o.course_id, o.content, o.total_hours, \
    o.updated_by_id, o.created_at, o.updated_at";

/// Attempts per publish before a transient conflict is surfaced.
const PUBLISH_RETRY_ATTEMPTS: u32 = 3;

/// Reads of the current outline, plus the publish transaction.
pub struct OutlineRepo;

impl OutlineRepo {
    /// Get the current published outline for a course.
    ///
    /// Returns `None` if the course has never been published.
    pub async fn get_current(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Option<OutlineRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM outline_current WHERE course_id = $1");
        sqlx::query_as::<_, OutlineRecord>(&query)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// Get the current published outline by human-readable course code.
    ///
    /// Resolves through the `courses` table, so this always returns the
    /// same row as [`Self::get_current`] for the matching course.
    pub async fn get_current_by_course_code(
        pool: &PgPool,
        course_code: &str,
    ) -> Result<Option<OutlineRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM outline_current o
             JOIN courses c ON o.course_id = c.id
             WHERE c.code = $1 AND c.deleted_at IS NULL"
        );
        sqlx::query_as::<_, OutlineRecord>(&query)
            .bind(course_code)
            .fetch_optional(pool)
            .await
    }

    /// Publish outline content for a course.
    ///
    /// In one transaction: lock the course row, upsert `outline_current`,
    /// and append a ledger snapshot with the next version number. The
    /// total hour count is recomputed here from the content's unit and
    /// assessment sequences; any caller-held total is ignored.
    ///
    /// Returns `None` if the course does not exist (or is deleted) --
    /// nothing is written in that case. Transient conflicts
    /// (serialization failure, deadlock) are retried a bounded number of
    /// times before the error is surfaced.
    pub async fn publish(
        pool: &PgPool,
        course_id: DbId,
        content: &OutlineContent,
        editor_id: DbId,
    ) -> Result<Option<OutlineVersion>, sqlx::Error> {
        let mut attempt = 1;
        loop {
            match Self::publish_once(pool, course_id, content, editor_id).await {
                Err(err) if attempt < PUBLISH_RETRY_ATTEMPTS && is_transient_conflict(&err) => {
                    tracing::warn!(
                        course_id,
                        attempt,
                        error = %err,
                        "Publish transaction hit a transient conflict, retrying"
                    );
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// One attempt of the publish transaction.
    async fn publish_once(
        pool: &PgPool,
        course_id: DbId,
        content: &OutlineContent,
        editor_id: DbId,
    ) -> Result<Option<OutlineVersion>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Course-scoped critical section: the row lock serializes every
        // publish (and restore) for this course until commit.
        let locked: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM courses WHERE id = $1 AND deleted_at IS NULL FOR UPDATE",
        )
        .bind(course_id)
        .fetch_optional(&mut *tx)
        .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let total_hours = outline::total_hours(content);

        // First write: overwrite (or create) the current outline.
        sqlx::query(
            "INSERT INTO outline_current (course_id, content, total_hours, updated_by_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (course_id) DO UPDATE SET
                 content = EXCLUDED.content,
                 total_hours = EXCLUDED.total_hours,
                 updated_by_id = EXCLUDED.updated_by_id",
        )
        .bind(course_id)
        .bind(Json(content))
        .bind(total_hours)
        .bind(editor_id)
        .execute(&mut *tx)
        .await?;

        // Second write: append the immutable snapshot. Any failure here
        // rolls back the upsert above with the transaction.
        let version =
            OutlineVersionRepo::append(&mut *tx, course_id, content, total_hours, editor_id)
                .await?;

        tx.commit().await?;
        Ok(Some(version))
    }
}

/// Whether a publish failure is worth retrying: Postgres serialization
/// failure (40001) or deadlock (40P01).
fn is_transient_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            matches!(db_err.code().as_deref(), Some("40001") | Some("40P01"))
        }
        _ => false,
    }
}
