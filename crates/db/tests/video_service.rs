//! Integration tests for the video service against a real SQLite database.

use std::time::Duration;

use assert_matches::assert_matches;
use cinelog_core::error::CoreError;
use cinelog_core::video::{VideoDraft, VideoInput};
use cinelog_db::{ServiceError, VideoService};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn draft(title: &str) -> VideoDraft {
    VideoInput::new(title, format!("{title} description"), format!("{title}.mp4"))
        .validate()
        .unwrap()
}

/// Keep consecutive writes on distinct timestamps.
async fn tick() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

// ---------------------------------------------------------------------------
// create / get_by_id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_then_get_returns_same_record(pool: SqlitePool) {
    let service = VideoService::new(pool);

    let input = VideoInput::new("Sintel", "Open movie", "sintel.mp4").with_thumbnail("sintel.jpg");
    let created = service.create(&input.validate().unwrap()).await.unwrap();

    assert_eq!(created.title, "Sintel");
    assert_eq!(created.thumbnail.as_deref(), Some("sintel.jpg"));
    assert_eq!(created.duration, None);
    assert_eq!(created.uploaded_at, created.updated_at);

    let fetched = service.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[sqlx::test(migrations = "./migrations")]
async fn created_ids_are_unique(pool: SqlitePool) {
    let service = VideoService::new(pool);

    let a = service.create(&draft("A")).await.unwrap();
    let b = service.create(&draft("A")).await.unwrap();

    assert_ne!(a.id, b.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn get_unknown_id_is_none(pool: SqlitePool) {
    let service = VideoService::new(pool);

    let found = service.get_by_id(uuid::Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_replaces_fields_and_keeps_upload_time(pool: SqlitePool) {
    let service = VideoService::new(pool);
    let created = service
        .create(&VideoInput::new("A", "d", "a.mp4").with_thumbnail("a.jpg").validate().unwrap())
        .await
        .unwrap();
    tick().await;

    let updated = service
        .update(created.id, &VideoInput::new("B", "d2", "b.mp4").validate().unwrap())
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "B");
    assert_eq!(updated.description, "d2");
    assert_eq!(updated.filename, "b.mp4");
    assert_eq!(updated.thumbnail, None);
    assert_eq!(updated.uploaded_at, created.uploaded_at);
    assert!(updated.updated_at > created.updated_at);

    let fetched = service.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_unknown_id_is_not_found(pool: SqlitePool) {
    let service = VideoService::new(pool);

    let result = service.update(uuid::Uuid::new_v4(), &draft("A")).await;

    assert_matches!(
        result,
        Err(ServiceError::Core(CoreError::NotFound { entity: "Video", .. }))
    );
    assert!(service.list().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn updated_at_never_moves_backwards(pool: SqlitePool) {
    let service = VideoService::new(pool.clone());
    let created = service.create(&draft("A")).await.unwrap();

    // Simulate a row last touched in the future (e.g. by a skewed clock).
    let future = created.updated_at + chrono::Duration::days(1);
    sqlx::query("UPDATE videos SET updated_at = ?1 WHERE id = ?2")
        .bind(future)
        .bind(created.id.to_string())
        .execute(&pool)
        .await
        .unwrap();

    let updated = service.update(created.id, &draft("B")).await.unwrap();

    assert_eq!(updated.title, "B");
    assert_eq!(updated.updated_at, future);
}

// ---------------------------------------------------------------------------
// delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn delete_is_idempotent(pool: SqlitePool) {
    let service = VideoService::new(pool);
    let created = service.create(&draft("A")).await.unwrap();

    service.delete(created.id).await.unwrap();
    assert!(service.get_by_id(created.id).await.unwrap().is_none());

    service.delete(created.id).await.unwrap();
}

// ---------------------------------------------------------------------------
// list / search ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_is_newest_first(pool: SqlitePool) {
    let service = VideoService::new(pool);
    assert!(service.list().await.unwrap().is_empty());

    for title in ["first", "second", "third"] {
        service.create(&draft(title)).await.unwrap();
        tick().await;
    }

    let titles: Vec<String> = service
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.title)
        .collect();
    assert_eq!(titles, ["third", "second", "first"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn search_matches_substring_sorted_by_title(pool: SqlitePool) {
    let service = VideoService::new(pool);
    for title in ["Tears of Steel", "Big Buck Bunny", "Cosmos Laundromat", "Steel Bars"] {
        service.create(&draft(title)).await.unwrap();
    }

    let titles: Vec<String> = service
        .search("steel")
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.title)
        .collect();

    assert_eq!(titles, ["Steel Bars", "Tears of Steel"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn search_treats_wildcards_literally(pool: SqlitePool) {
    let service = VideoService::new(pool);
    service.create(&draft("100% Wolf")).await.unwrap();
    service.create(&draft("1000 Wolves")).await.unwrap();
    service.create(&draft("a_b")).await.unwrap();
    service.create(&draft("axb")).await.unwrap();

    let percent = service.search("0%").await.unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "100% Wolf");

    let underscore = service.search("a_b").await.unwrap();
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].title, "a_b");
}

#[sqlx::test(migrations = "./migrations")]
async fn search_without_matches_is_empty(pool: SqlitePool) {
    let service = VideoService::new(pool);
    service.create(&draft("Sintel")).await.unwrap();

    assert!(service.search("zzz").await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// rows written outside the service
// ---------------------------------------------------------------------------

/// `CURRENT_TIMESTAMP` format, as written by the schema defaults.
fn sqlite_timestamp(ts: chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[sqlx::test(migrations = "./migrations")]
async fn undecodable_rows_do_not_hide_the_catalog(pool: SqlitePool) {
    let service = VideoService::new(pool.clone());
    let created = service.create(&draft("Steel")).await.unwrap();

    sqlx::query("INSERT INTO videos (id, title, filename) VALUES ('legacy-1', 'Steel Legacy', 'l.mp4')")
        .execute(&pool)
        .await
        .unwrap();

    let listed = service.list().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let found = service.search("Steel").await.unwrap();
    assert_eq!(found, vec![created]);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_orders_mixed_timestamp_formats_by_instant(pool: SqlitePool) {
    let service = VideoService::new(pool.clone());
    let now = chrono::Utc::now();

    for (title, at) in [
        ("earlier", now - chrono::Duration::hours(1)),
        ("later", now + chrono::Duration::hours(1)),
    ] {
        sqlx::query(
            "INSERT INTO videos (id, title, filename, uploaded_at, updated_at) \
             VALUES (?1, ?2, 'x.mp4', ?3, ?3)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(title)
        .bind(sqlite_timestamp(at))
        .execute(&pool)
        .await
        .unwrap();
    }
    service.create(&draft("current")).await.unwrap();

    let titles: Vec<String> = service
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.title)
        .collect();
    assert_eq!(titles, ["later", "current", "earlier"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_compares_mixed_timestamp_formats_by_instant(pool: SqlitePool) {
    let service = VideoService::new(pool.clone());
    let created = service.create(&draft("A")).await.unwrap();

    let later = created.updated_at + chrono::Duration::hours(1);
    let later_text = sqlite_timestamp(later);
    sqlx::query("UPDATE videos SET updated_at = ?1 WHERE id = ?2")
        .bind(&later_text)
        .bind(created.id.to_string())
        .execute(&pool)
        .await
        .unwrap();

    let updated = service.update(created.id, &draft("B")).await.unwrap();

    assert_eq!(updated.title, "B");
    assert_eq!(sqlite_timestamp(updated.updated_at), later_text);
}
