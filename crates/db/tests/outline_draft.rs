//! Integration tests for the draft store.
//!
//! Exercises `OutlineDraftRepo` against a real database:
//! - Upsert creates on first save and replaces on subsequent saves
//! - Drafts are scoped per (course, editor); editors never see each
//!   other's drafts
//! - Saving a draft never touches the current outline
//! - Deleting a draft removes only the owning editor's row

use atrium_core::outline::{OutlineContent, OutlineUnit};
use sqlx::PgPool;

use atrium_db::models::course::CreateCourse;
use atrium_db::models::user::CreateUser;
use atrium_db::repositories::{CourseRepo, OutlineDraftRepo, OutlineRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn setup_course(pool: &PgPool, code: &str) -> i64 {
    let course = CourseRepo::create(
        pool,
        &CreateCourse {
            code: code.to_string(),
            title: format!("Course {code}"),
            description: None,
        },
    )
    .await
    .unwrap();
    course.id
}

async fn setup_editor(pool: &PgPool, username: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            display_name: username.to_string(),
        },
    )
    .await
    .unwrap();
    user.id
}

fn draft_content(name: &str) -> OutlineContent {
    OutlineContent {
        name: Some(name.to_string()),
        units: vec![OutlineUnit {
            position: 0,
            label: "Introduction".to_string(),
            description: None,
            hours: 10.0,
        }],
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Test: first save inserts, second save replaces
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_is_idempotent_per_editor(pool: PgPool) {
    let course_id = setup_course(&pool, "DRF1").await;
    let editor_id = setup_editor(&pool, "draft_editor").await;

    let first = OutlineDraftRepo::upsert(&pool, course_id, editor_id, &draft_content("v1"))
        .await
        .unwrap();
    assert_eq!(first.content.0.name.as_deref(), Some("v1"));

    let second = OutlineDraftRepo::upsert(&pool, course_id, editor_id, &draft_content("v2"))
        .await
        .unwrap();
    assert_eq!(second.id, first.id, "upsert must replace, not duplicate");
    assert_eq!(second.content.0.name.as_deref(), Some("v2"));

    let count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM outline_drafts WHERE course_id = $1 AND editor_id = $2",
    )
    .bind(course_id)
    .bind(editor_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count.0, 1, "exactly one draft row per (course, editor)");
}

// ---------------------------------------------------------------------------
// Test: drafts are isolated per editor
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_drafts_are_editor_scoped(pool: PgPool) {
    let course_id = setup_course(&pool, "DRF2").await;
    let editor_a = setup_editor(&pool, "editor_a").await;
    let editor_b = setup_editor(&pool, "editor_b").await;

    OutlineDraftRepo::upsert(&pool, course_id, editor_a, &draft_content("from A"))
        .await
        .unwrap();
    OutlineDraftRepo::upsert(&pool, course_id, editor_b, &draft_content("from B"))
        .await
        .unwrap();

    let a = OutlineDraftRepo::find(&pool, course_id, editor_a)
        .await
        .unwrap()
        .expect("editor A should see their draft");
    let b = OutlineDraftRepo::find(&pool, course_id, editor_b)
        .await
        .unwrap()
        .expect("editor B should see their draft");

    assert_eq!(a.content.0.name.as_deref(), Some("from A"));
    assert_eq!(b.content.0.name.as_deref(), Some("from B"));
}

// ---------------------------------------------------------------------------
// Test: saving a draft does not affect the current outline
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draft_save_leaves_current_untouched(pool: PgPool) {
    let course_id = setup_course(&pool, "DRF3").await;
    let editor_id = setup_editor(&pool, "quiet_editor").await;

    OutlineDraftRepo::upsert(&pool, course_id, editor_id, &draft_content("draft only"))
        .await
        .unwrap();

    let current = OutlineRepo::get_current(&pool, course_id).await.unwrap();
    assert!(
        current.is_none(),
        "a draft save must never create a published outline"
    );
}

// ---------------------------------------------------------------------------
// Test: missing draft reads back as None
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_draft_returns_none(pool: PgPool) {
    let course_id = setup_course(&pool, "DRF4").await;
    let editor_id = setup_editor(&pool, "no_draft_editor").await;

    let found = OutlineDraftRepo::find(&pool, course_id, editor_id)
        .await
        .unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Test: delete removes only the owning editor's draft
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_is_editor_scoped(pool: PgPool) {
    let course_id = setup_course(&pool, "DRF5").await;
    let editor_a = setup_editor(&pool, "del_a").await;
    let editor_b = setup_editor(&pool, "del_b").await;

    OutlineDraftRepo::upsert(&pool, course_id, editor_a, &draft_content("A")).await.unwrap();
    OutlineDraftRepo::upsert(&pool, course_id, editor_b, &draft_content("B")).await.unwrap();

    let deleted = OutlineDraftRepo::delete(&pool, course_id, editor_a)
        .await
        .unwrap();
    assert!(deleted);

    assert!(OutlineDraftRepo::find(&pool, course_id, editor_a)
        .await
        .unwrap()
        .is_none());
    assert!(
        OutlineDraftRepo::find(&pool, course_id, editor_b)
            .await
            .unwrap()
            .is_some(),
        "deleting A's draft must not touch B's"
    );
}
