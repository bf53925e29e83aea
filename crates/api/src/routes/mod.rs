pub mod course;
pub mod health;
pub mod outline;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /courses                                             list, create
/// /courses/{id}                                        get, update, delete
///
/// /courses/{course_id}/outline                         current outline (GET)
/// /courses/{course_id}/outline/draft                   get draft (?editor_id), save draft (PUT)
/// /courses/{course_id}/outline/publish                 publish (POST)
/// /courses/{course_id}/outline/versions                version history (GET)
/// /courses/{course_id}/outline/versions/{n}            one version (GET)
/// /courses/{course_id}/outline/versions/{n}/restore    restore (POST)
///
/// /outlines/by-code/{course_code}                      current outline by course code (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Courses (also nests the per-course outline lifecycle routes).
        .nest("/courses", course::router())
        // Course-code lookup for the current outline.
        .nest("/outlines", outline::by_code_router())
}
