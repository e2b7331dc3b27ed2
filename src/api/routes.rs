use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::config::Config;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Multipart framing adds a little on top of the file itself
    let upload_limit = state.config.max_upload_size as usize + 64 * 1024;

    let mut router = Router::new()
        // Photos
        .route("/photos", get(handlers::get_photos).post(handlers::upload_photo))
        .route(
            "/photos/upload",
            post(handlers::upload_photo_file).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/media/:key", get(handlers::serve_media))
        // Videos
        .route("/videos", get(handlers::get_videos).post(handlers::add_video))
        // Guestbook
        .route(
            "/guestbook",
            get(handlers::get_guestbook_messages).post(handlers::create_guestbook_message),
        )
        // Internal
        .route("/_internal/health", get(handlers::health));

    // Test-only routes
    if state.config.test_mode {
        tracing::warn!("Test mode enabled, purge route is available.");
        router = router.route("/admin/purge", delete(handlers::admin_purge));
    }

    router
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.server.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .server
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
