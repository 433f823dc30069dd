//! tunebase library - server-rendered music database web application
//!
//! Exposes a relational music catalog (songs, albums, artists, genres,
//! playlists, users, follows, listens) through HTML pages backed by
//! parameterized SQL queries.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::session::SessionStore;

pub mod api;
pub mod db;
pub mod error;
pub mod session;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// In-process session store (cookie token -> username)
    pub sessions: SessionStore,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            sessions: SessionStore::new(),
        }
    }
}

/// Build application router
///
/// Every page handler is an independent, stateless request-to-SQL mapping;
/// the only cross-request state is the session store.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::index))
        .route("/another", get(api::another))
        .route("/add", post(api::add_name))
        .route("/search_song", get(api::search_song))
        .route("/search_album", get(api::search_album))
        .route("/search_artist", get(api::search_artist))
        .route("/search_genre", get(api::search_genre))
        .route("/search_g/:genre_name", get(api::search_genre_named))
        .route("/search_playlist", get(api::search_playlist))
        .route("/album/:album_id", get(api::album_details))
        .route("/artist/:artist_id", get(api::artist_details))
        .route("/genre/:genre_id", get(api::genre_details))
        .route("/playlist/:playlist_id", get(api::playlist_details))
        .route("/login", get(api::login_page).post(api::login))
        .route("/logout", get(api::logout))
        .route("/profile/:username", get(api::profile))
        .route("/recommendations/:username", get(api::recommend_songs))
        .route("/recommend_artists/:username", get(api::recommend_artists))
        .route("/recommend_playlists/:username", get(api::recommend_playlists))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
