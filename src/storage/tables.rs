use redb::TableDefinition;

/// Per-table id sequences: table name -> last allocated id
pub const SEQUENCES: TableDefinition<&str, u64> = TableDefinition::new("sequences");

/// Photo rows: id -> Photo (msgpack)
pub const PHOTOS: TableDefinition<u64, &[u8]> = TableDefinition::new("photos");

/// Photo ordering index: (uploaded_at micros, id) -> ()
pub const PHOTOS_BY_TIME: TableDefinition<(i64, u64), ()> =
    TableDefinition::new("photos_by_time");

/// Video rows: id -> Video (msgpack)
pub const VIDEOS: TableDefinition<u64, &[u8]> = TableDefinition::new("videos");

/// Video ordering index: (uploaded_at micros, id) -> ()
pub const VIDEOS_BY_TIME: TableDefinition<(i64, u64), ()> =
    TableDefinition::new("videos_by_time");

/// Guestbook rows: id -> GuestbookMessage (msgpack)
pub const GUESTBOOK_MESSAGES: TableDefinition<u64, &[u8]> =
    TableDefinition::new("guestbook_messages");

/// Guestbook ordering index: (created_at micros, id) -> ()
pub const GUESTBOOK_MESSAGES_BY_TIME: TableDefinition<(i64, u64), ()> =
    TableDefinition::new("guestbook_messages_by_time");

/// A row table paired with its timestamp index.
#[derive(Clone, Copy)]
pub struct Collection {
    pub name: &'static str,
    pub rows: TableDefinition<'static, u64, &'static [u8]>,
    pub by_time: TableDefinition<'static, (i64, u64), ()>,
}

pub const PHOTO_COLLECTION: Collection = Collection {
    name: "photos",
    rows: PHOTOS,
    by_time: PHOTOS_BY_TIME,
};

pub const VIDEO_COLLECTION: Collection = Collection {
    name: "videos",
    rows: VIDEOS,
    by_time: VIDEOS_BY_TIME,
};

pub const GUESTBOOK_COLLECTION: Collection = Collection {
    name: "guestbook_messages",
    rows: GUESTBOOK_MESSAGES,
    by_time: GUESTBOOK_MESSAGES_BY_TIME,
};

pub const ALL_COLLECTIONS: [Collection; 3] =
    [PHOTO_COLLECTION, VIDEO_COLLECTION, GUESTBOOK_COLLECTION];
