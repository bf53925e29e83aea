//! Read-only handlers over the version ledger.

use atrium_core::error::CoreError;
use atrium_core::types::DbId;
use axum::extract::{Path, State};
use axum::Json;

use atrium_db::models::outline_version::OutlineVersion;
use atrium_db::repositories::OutlineVersionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/courses/{course_id}/outline/versions
///
/// Full version history, newest first.
pub async fn list_versions(
    State(state): State<AppState>,
    Path(course_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<OutlineVersion>>>> {
    let versions = OutlineVersionRepo::list_by_course(&state.pool, course_id).await?;
    Ok(Json(DataResponse { data: versions }))
}

/// GET /api/v1/courses/{course_id}/outline/versions/{version_number}
///
/// One historical snapshot, for display.
pub async fn get_version(
    State(state): State<AppState>,
    Path((course_id, version_number)): Path<(DbId, i32)>,
) -> AppResult<Json<OutlineVersion>> {
    let version =
        OutlineVersionRepo::find_by_course_and_version(&state.pool, course_id, version_number)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "OutlineVersion",
                id: version_number as DbId,
            }))?;
    Ok(Json(version))
}
