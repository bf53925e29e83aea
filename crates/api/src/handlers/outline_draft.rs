//! Handlers for per-editor outline drafts.
//!
//! Drafts are private to the editor named in the request; the caller's
//! request layer is trusted to have authenticated that identity. A
//! missing draft is a plain 404 -- falling back to the current outline
//! is the caller's policy, not this API's.

use atrium_core::error::CoreError;
use atrium_core::outline;
use atrium_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::Json;

use atrium_db::models::outline_draft::{DraftQuery, OutlineDraft, SaveDraftRequest};
use atrium_db::repositories::{CourseRepo, OutlineDraftRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/courses/{course_id}/outline/draft?editor_id={id}
pub async fn get_draft(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Query(query): Query<DraftQuery>,
) -> AppResult<Json<OutlineDraft>> {
    let draft = OutlineDraftRepo::find(&state.pool, course_id, query.editor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OutlineDraft",
            id: course_id,
        }))?;
    Ok(Json(draft))
}

/// PUT /api/v1/courses/{course_id}/outline/draft
///
/// Idempotent upsert: the editor's previous draft content, if any, is
/// replaced. Never touches the published outline or the version ledger.
pub async fn save_draft(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
    Json(input): Json<SaveDraftRequest>,
) -> AppResult<Json<OutlineDraft>> {
    outline::validate_content(&input.content)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    CourseRepo::find_by_id(&state.pool, course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        }))?;
    UserRepo::find_by_id(&state.pool, input.editor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.editor_id,
        }))?;

    let draft =
        OutlineDraftRepo::upsert(&state.pool, course_id, input.editor_id, &input.content).await?;
    Ok(Json(draft))
}
