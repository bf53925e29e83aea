//! Route definitions for the `/courses` resource.
//!
//! Also nests the outline lifecycle routes under
//! `/courses/{course_id}/outline/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::course;
use crate::routes::outline;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// (nested) /{course_id}/outline/...         -> outline lifecycle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list).post(course::create))
        .route(
            "/{id}",
            get(course::get_by_id)
                .put(course::update)
                .delete(course::delete),
        )
        .nest("/{course_id}/outline", outline::course_outline_routes())
}
