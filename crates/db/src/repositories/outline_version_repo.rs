//! Repository for the `outline_versions` ledger.
//!
//! The ledger is append-only: rows are created by the publish
//! transaction in [`crate::repositories::OutlineRepo`] and never updated
//! or deleted afterwards. `append` therefore takes a transaction
//! connection and is crate-private; everything else is read-only.

use atrium_core::outline::OutlineContent;
use atrium_core::types::DbId;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::outline_version::OutlineVersion;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, course_id, version_number, content, total_hours, \
    editor_id, published_at, created_at, updated_at";

/// Read access to the version ledger, plus the publish-internal append.
pub struct OutlineVersionRepo;

impl OutlineVersionRepo {
    /// Append a snapshot to the ledger, assigning the next version number
    /// for the course (`MAX + 1`, starting at 1).
    ///
    /// Runs on the publish transaction's connection: the caller holds the
    /// course row lock, so two publishes for the same course can never
    /// compute the same number. The bound content is serialized into the
    /// row, making the snapshot independent of the caller's value.
    pub(crate) async fn append(
        conn: &mut PgConnection,
        course_id: DbId,
        content: &OutlineContent,
        total_hours: f64,
        editor_id: DbId,
    ) -> Result<OutlineVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO outline_versions
                (course_id, version_number, content, total_hours, editor_id)
             VALUES ($1,
                     COALESCE((SELECT MAX(version_number) FROM outline_versions WHERE course_id = $1), 0) + 1,
                     $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OutlineVersion>(&query)
            .bind(course_id)
            .bind(Json(content))
            .bind(total_hours)
            .bind(editor_id)
            .fetch_one(conn)
            .await
    }

    /// List all versions for a course, newest first.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Vec<OutlineVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM outline_versions
             WHERE course_id = $1
             ORDER BY version_number DESC"
        );
        sqlx::query_as::<_, OutlineVersion>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await
    }

    /// Find a specific version by course and version number.
    pub async fn find_by_course_and_version(
        pool: &PgPool,
        course_id: DbId,
        version_number: i32,
    ) -> Result<Option<OutlineVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM outline_versions
             WHERE course_id = $1 AND version_number = $2"
        );
        sqlx::query_as::<_, OutlineVersion>(&query)
            .bind(course_id)
            .bind(version_number)
            .fetch_optional(pool)
            .await
    }

    /// Get the latest (highest version number) version for a course.
    pub async fn get_latest(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Option<OutlineVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM outline_versions
             WHERE course_id = $1
             ORDER BY version_number DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, OutlineVersion>(&query)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// Count the total number of versions for a course.
    pub async fn count_for_course(pool: &PgPool, course_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM outline_versions WHERE course_id = $1")
                .bind(course_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
