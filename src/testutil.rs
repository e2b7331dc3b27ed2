//! Shared test helpers for in-crate router tests.

use std::sync::Arc;

use crate::config::{Config, MediaConfig, ServerConfig};
use crate::media::LocalMediaStore;
use crate::storage::Database;
use crate::AppState;

/// Create a test AppState with a temporary database and local media store.
pub fn test_state(temp_dir: &tempfile::TempDir) -> Arc<AppState> {
    test_state_with(temp_dir, |_| {})
}

/// Like [`test_state`], with a hook to adjust the config first.
pub fn test_state_with(
    temp_dir: &tempfile::TempDir,
    configure: impl FnOnce(&mut Config),
) -> Arc<AppState> {
    let data_dir = temp_dir.path().join("data");
    let media_dir = temp_dir.path().join("media");

    let mut config = Config {
        server: ServerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            data_dir: data_dir.to_string_lossy().to_string(),
            allowed_origins: Vec::new(),
        },
        media: MediaConfig {
            local_path: media_dir.to_string_lossy().to_string(),
        },
        test_mode: true,
        max_upload_size: 1024 * 1024, // 1MB for tests
    };
    configure(&mut config);

    let db = Database::open(&data_dir).expect("Failed to open test database");
    let media = LocalMediaStore::new(&media_dir).expect("Failed to create test media store");

    Arc::new(AppState {
        config,
        db,
        media: Arc::new(media),
    })
}
