//! Handlers for the current outline and the publish/restore operations.
//!
//! Restore is not a separate write path: it loads a stored version's
//! content and runs it through the same [`publish_content`] helper as an
//! ordinary publish, so validation, hour derivation, and version
//! numbering can never diverge between the two.

use atrium_core::error::CoreError;
use atrium_core::outline::{self, OutlineContent};
use atrium_core::types::DbId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use atrium_db::models::outline::{OutlineRecord, PublishOutlineRequest};
use atrium_db::models::outline_version::{OutlineVersion, RestoreVersionRequest};
use atrium_db::repositories::{OutlineRepo, OutlineVersionRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/courses/{course_id}/outline
///
/// The current published outline. 404 until the course's first publish.
pub async fn get_current(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<OutlineRecord>> {
    let record = OutlineRepo::get_current(&state.pool, course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outline",
            id: course_id,
        }))?;
    Ok(Json(record))
}

/// GET /api/v1/outlines/by-code/{course_code}
pub async fn get_current_by_course_code(
    State(state): State<AppState>,
    Path(course_code): Path<String>,
) -> AppResult<Json<OutlineRecord>> {
    let record = OutlineRepo::get_current_by_course_code(&state.pool, &course_code)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByCode {
                entity: "Outline",
                code: course_code.clone(),
            })
        })?;
    Ok(Json(record))
}

/// POST /api/v1/courses/{course_id}/outline/publish
///
/// Returns the newly appended version entry (201).
pub async fn publish(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(input): Json<PublishOutlineRequest>,
) -> AppResult<(StatusCode, Json<OutlineVersion>)> {
    let version = publish_content(&state, course_id, input.editor_id, &input.content).await?;
    Ok((StatusCode::CREATED, Json(version)))
}

/// POST /api/v1/courses/{course_id}/outline/versions/{version_number}/restore
///
/// Re-publishes the stored content of an older version as a new highest
/// version. Versions after the restored one are neither deleted nor
/// renumbered.
pub async fn restore(
    State(state): State<AppState>,
    Path((course_id, version_number)): Path<(DbId, i32)>,
    Json(input): Json<RestoreVersionRequest>,
) -> AppResult<(StatusCode, Json<OutlineVersion>)> {
    let old =
        OutlineVersionRepo::find_by_course_and_version(&state.pool, course_id, version_number)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "OutlineVersion",
                id: version_number as DbId,
            }))?;

    let version = publish_content(&state, course_id, input.editor_id, &old.content.0).await?;
    Ok((StatusCode::CREATED, Json(version)))
}

/// Shared publish path: validate, check the editor, then run the
/// transactional publish. Validation happens before any write.
async fn publish_content(
    state: &AppState,
    course_id: DbId,
    editor_id: DbId,
    content: &OutlineContent,
) -> AppResult<OutlineVersion> {
    outline::validate_content(content)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    UserRepo::find_by_id(&state.pool, editor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: editor_id,
        }))?;

    let version = OutlineRepo::publish(&state.pool, course_id, content, editor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;

    tracing::info!(
        course_id,
        editor_id,
        version_number = version.version_number,
        "Published outline version"
    );
    Ok(version)
}
