use celebration_wall::storage::models::{
    AddVideoInput, CreateGuestbookMessageInput, Page, UploadPhotoInput,
};
use celebration_wall::storage::Database;
use chrono::{Duration, Utc};

fn test_db() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("data")).unwrap();
    (dir, db)
}

fn sample_photo(filename: &str, uploaded_by: &str) -> UploadPhotoInput {
    UploadPhotoInput {
        filename: filename.to_string(),
        original_name: format!("Original {filename}"),
        file_path: format!("/uploads/{filename}"),
        uploaded_by: uploaded_by.to_string(),
    }
}

fn sample_video(title: &str, video_url: &str, thumbnail_url: Option<&str>) -> AddVideoInput {
    AddVideoInput {
        title: title.to_string(),
        video_url: video_url.to_string(),
        thumbnail_url: thumbnail_url.map(str::to_string),
        uploaded_by: "testuser".to_string(),
    }
}

fn sample_message(author_name: &str, message: &str) -> CreateGuestbookMessageInput {
    CreateGuestbookMessageInput {
        author_name: author_name.to_string(),
        message: message.to_string(),
    }
}

// ============================================================================
// Photos
// ============================================================================

#[test]
fn test_insert_and_get_photo() {
    let (_dir, db) = test_db();
    let now = Utc::now();

    let photo = db
        .insert_photo(&sample_photo("photo1.jpg", "user1"), now)
        .unwrap();
    assert_eq!(photo.id, 1);
    assert_eq!(photo.filename, "photo1.jpg");
    assert_eq!(photo.original_name, "Original photo1.jpg");
    assert_eq!(photo.file_path, "/uploads/photo1.jpg");
    assert_eq!(photo.uploaded_by, "user1");
    assert_eq!(photo.uploaded_at, now);

    let stored = db.get_photo(photo.id).unwrap().expect("photo should exist");
    assert_eq!(stored, photo);
}

#[test]
fn test_get_photo_not_found() {
    let (_dir, db) = test_db();
    assert!(db.get_photo(42).unwrap().is_none());
}

#[test]
fn test_list_photos_empty() {
    let (_dir, db) = test_db();
    let listing = db.list_photos(Page::all()).unwrap();
    assert!(listing.items.is_empty());
    assert_eq!(listing.total, 0);
}

#[test]
fn test_list_photos_newest_first_by_timestamp() {
    let (_dir, db) = test_db();
    let now = Utc::now();

    // Inserted out of time order on purpose
    db.insert_photo(&sample_photo("photo1.jpg", "user1"), now - Duration::hours(2))
        .unwrap();
    db.insert_photo(&sample_photo("photo2.png", "user2"), now)
        .unwrap();
    db.insert_photo(&sample_photo("photo3.gif", "user1"), now - Duration::hours(1))
        .unwrap();

    let listing = db.list_photos(Page::all()).unwrap();
    let names: Vec<&str> = listing.items.iter().map(|p| p.filename.as_str()).collect();
    assert_eq!(names, vec!["photo2.png", "photo3.gif", "photo1.jpg"]);
    assert_eq!(listing.total, 3);
}

#[test]
fn test_list_photos_same_timestamp_breaks_ties_by_id() {
    let (_dir, db) = test_db();
    let now = Utc::now();

    db.insert_photo(&sample_photo("first.jpg", "a"), now).unwrap();
    db.insert_photo(&sample_photo("second.jpg", "b"), now).unwrap();

    let listing = db.list_photos(Page::all()).unwrap();
    assert_eq!(listing.items[0].filename, "second.jpg");
    assert_eq!(listing.items[1].filename, "first.jpg");
}

#[test]
fn test_list_photos_pagination() {
    let (_dir, db) = test_db();
    let now = Utc::now();
    for (i, name) in ["a.jpg", "b.jpg", "c.jpg"].iter().enumerate() {
        db.insert_photo(&sample_photo(name, "user"), now + Duration::seconds(i as i64))
            .unwrap();
    }

    let limited = db.list_photos(Page::new(Some(2), None)).unwrap();
    assert_eq!(limited.items.len(), 2);
    assert_eq!(limited.items[0].filename, "c.jpg");
    assert_eq!(limited.total, 3);

    let offset = db.list_photos(Page::new(None, Some(1))).unwrap();
    let names: Vec<&str> = offset.items.iter().map(|p| p.filename.as_str()).collect();
    assert_eq!(names, vec!["b.jpg", "a.jpg"]);

    let both = db.list_photos(Page::new(Some(1), Some(1))).unwrap();
    assert_eq!(both.items.len(), 1);
    assert_eq!(both.items[0].filename, "b.jpg");

    let beyond = db.list_photos(Page::new(None, Some(10))).unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 3);

    let large = db.list_photos(Page::new(Some(100), None)).unwrap();
    assert_eq!(large.items.len(), 3);
}

// ============================================================================
// Videos
// ============================================================================

#[test]
fn test_insert_video_with_and_without_thumbnail() {
    let (_dir, db) = test_db();
    let now = Utc::now();

    let with_thumb = db
        .insert_video(
            &sample_video(
                "Test Video",
                "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                Some("https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"),
            ),
            now,
        )
        .unwrap();
    assert_eq!(
        with_thumb.thumbnail_url.as_deref(),
        Some("https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg")
    );

    let without_thumb = db
        .insert_video(
            &sample_video("No Thumbnail", "https://vimeo.com/123456789", None),
            now,
        )
        .unwrap();
    assert_eq!(without_thumb.thumbnail_url, None);
    assert_ne!(with_thumb.id, without_thumb.id);

    let stored = db.get_video(without_thumb.id).unwrap().unwrap();
    assert_eq!(stored.title, "No Thumbnail");
    assert_eq!(stored.video_url, "https://vimeo.com/123456789");
    assert_eq!(stored.thumbnail_url, None);
}

#[test]
fn test_list_videos_order_and_window() {
    let (_dir, db) = test_db();
    let now = Utc::now();

    db.insert_video(
        &sample_video("First", "https://www.youtube.com/watch?v=first", None),
        now - Duration::minutes(5),
    )
    .unwrap();
    db.insert_video(
        &sample_video("Second", "https://www.youtube.com/watch?v=second", None),
        now,
    )
    .unwrap();

    let listing = db.list_videos(Page::all()).unwrap();
    assert_eq!(listing.items[0].title, "Second");
    assert_eq!(listing.items[1].title, "First");

    let page = db.list_videos(Page::new(Some(1), Some(1))).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "First");
}

// ============================================================================
// Guestbook
// ============================================================================

#[test]
fn test_insert_guestbook_message() {
    let (_dir, db) = test_db();
    let now = Utc::now();

    let entry = db
        .insert_guestbook_message(&sample_message("Ana", "Happy birthday!"), now)
        .unwrap();
    assert_eq!(entry.id, 1);
    assert_eq!(entry.author_name, "Ana");
    assert_eq!(entry.message, "Happy birthday!");
    assert_eq!(entry.created_at, now);

    let stored = db.get_guestbook_message(1).unwrap().unwrap();
    assert_eq!(stored, entry);
}

#[test]
fn test_list_guestbook_messages() {
    let (_dir, db) = test_db();
    let now = Utc::now();

    for i in 0..5 {
        db.insert_guestbook_message(
            &sample_message(&format!("guest{i}"), "🎉"),
            now + Duration::seconds(i),
        )
        .unwrap();
    }

    let listing = db.list_guestbook_messages(Page::new(Some(2), None)).unwrap();
    let authors: Vec<&str> = listing.items.iter().map(|m| m.author_name.as_str()).collect();
    assert_eq!(authors, vec!["guest4", "guest3"]);
    assert_eq!(listing.total, 5);
}

// ============================================================================
// Cross-table behaviour
// ============================================================================

#[test]
fn test_ids_are_independent_per_table() {
    let (_dir, db) = test_db();
    let now = Utc::now();

    let photo = db.insert_photo(&sample_photo("p.jpg", "u"), now).unwrap();
    let video = db
        .insert_video(&sample_video("v", "https://vimeo.com/1", None), now)
        .unwrap();
    let entry = db
        .insert_guestbook_message(&sample_message("a", "m"), now)
        .unwrap();

    assert_eq!(photo.id, 1);
    assert_eq!(video.id, 1);
    assert_eq!(entry.id, 1);
}

#[test]
fn test_rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let now = Utc::now();

    {
        let db = Database::open(&data_dir).unwrap();
        db.insert_photo(&sample_photo("kept.jpg", "u"), now).unwrap();
    }

    let db = Database::open(&data_dir).unwrap();
    let listing = db.list_photos(Page::all()).unwrap();
    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.items[0].filename, "kept.jpg");

    let next = db.insert_photo(&sample_photo("next.jpg", "u"), now).unwrap();
    assert_eq!(next.id, 2);
}

#[test]
fn test_purge_all_keeps_sequences() {
    let (_dir, db) = test_db();
    let now = Utc::now();

    db.insert_photo(&sample_photo("p1.jpg", "u"), now).unwrap();
    db.insert_photo(&sample_photo("p2.jpg", "u"), now).unwrap();
    db.insert_guestbook_message(&sample_message("a", "m"), now)
        .unwrap();

    let stats = db.purge_all().unwrap();
    assert_eq!(stats.photos, 2);
    assert_eq!(stats.videos, 0);
    assert_eq!(stats.guestbook_messages, 1);

    assert_eq!(db.list_photos(Page::all()).unwrap().total, 0);
    assert_eq!(db.list_guestbook_messages(Page::all()).unwrap().total, 0);
    assert!(db.get_photo(1).unwrap().is_none());

    let after = db.insert_photo(&sample_photo("p3.jpg", "u"), now).unwrap();
    assert_eq!(after.id, 3);
}
