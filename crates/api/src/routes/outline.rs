//! Route definitions for the outline lifecycle.
//!
//! The lifecycle is nested under a course:
//! `/courses/{course_id}/outline[/draft|/publish|/versions...]`,
//! plus a flat course-code lookup under `/outlines/by-code/{code}`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{outline, outline_draft, outline_history};
use crate::state::AppState;

/// Routes mounted under `/courses/{course_id}/outline`.
///
/// ```text
/// GET    /                       -> get_current
/// GET    /draft?editor_id=       -> get_draft
/// PUT    /draft                  -> save_draft
/// POST   /publish                -> publish
/// GET    /versions               -> list_versions
/// GET    /versions/{n}           -> get_version
/// POST   /versions/{n}/restore   -> restore
/// ```
pub fn course_outline_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(outline::get_current))
        .route(
            "/draft",
            get(outline_draft::get_draft).put(outline_draft::save_draft),
        )
        .route("/publish", post(outline::publish))
        .route("/versions", get(outline_history::list_versions))
        .route("/versions/{version_number}", get(outline_history::get_version))
        .route("/versions/{version_number}/restore", post(outline::restore))
}

/// Routes mounted at `/outlines`.
///
/// ```text
/// GET /by-code/{course_code} -> get_current_by_course_code
/// ```
pub fn by_code_router() -> Router<AppState> {
    Router::new().route(
        "/by-code/{course_code}",
        get(outline::get_current_by_course_code),
    )
}
