//! Integration tests for tunebase routes
//!
//! Covers:
//! - empty search parameters render empty result lists (not errors)
//! - detail lookups for nonexistent ids return 404
//! - login sets a session cookie and redirects; bad credentials bounce back
//! - profile access requires a matching session
//! - recommendations exclude listened songs and followed artists

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method
use tunebase::{build_router, AppState};

/// Seed an in-memory catalog:
/// - alice follows The Strokes (Rock) and has listened to "Last Nite"
/// - bob follows nothing
async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Should create in-memory database");

    tunebase::db::init_schema(&pool)
        .await
        .expect("Schema bootstrap should succeed");

    let seed = [
        "INSERT INTO genres VALUES ('g1', 'Rock'), ('g2', 'Jazz')",
        "INSERT INTO artists VALUES ('a1', 'The Strokes'), ('a2', 'Miles Davis'), ('a3', 'Arctic Monkeys')",
        "INSERT INTO artist_genres VALUES ('a1', 'g1'), ('a2', 'g2'), ('a3', 'g1')",
        "INSERT INTO albums VALUES
            ('al1', 'Is This It', 'a1', 'Rock', 2001),
            ('al2', 'Kind of Blue', 'a2', 'Jazz', 1959),
            ('al3', 'AM', 'a3', 'Rock', 2013)",
        "INSERT INTO songs VALUES
            ('s1', 'Last Nite', 'Rock', 193),
            ('s2', 'Someday', 'Rock', 187),
            ('s3', 'So What', 'Jazz', 562),
            ('s4', 'Do I Wanna Know?', 'Rock', 272)",
        "INSERT INTO album_songs VALUES ('al1', 's1'), ('al1', 's2'), ('al2', 's3'), ('al3', 's4')",
        "INSERT INTO playlists VALUES ('p1', 'Road Trip'), ('p2', 'Late Night')",
        "INSERT INTO playlist_songs VALUES ('p1', 's1'), ('p1', 's4'), ('p2', 's3')",
        "INSERT INTO users VALUES
            ('u1', 'alice', 'wonderland', 'alice@example.com'),
            ('u2', 'bob', 'builder', NULL)",
        "INSERT INTO follows VALUES ('u1', 'a1', '2024-05-01')",
        "INSERT INTO listens VALUES ('u1', 's1')",
        "INSERT INTO playlist_users VALUES ('u1', 'p1', 1), ('u2', 'p1', 0), ('u2', 'p2', 1)",
    ];
    for statement in seed {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("Seed statement should succeed");
    }

    pool
}

async fn setup_app() -> (axum::Router, AppState) {
    let db = setup_test_db().await;
    let state = AppState::new(db);
    (build_router(state.clone()), state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

// =============================================================================
// Health endpoint
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = setup_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value =
        serde_json::from_str(&body_text(response.into_body()).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "tunebase");
    assert!(body["version"].is_string());
}

// =============================================================================
// Guestbook demo pages
// =============================================================================

#[tokio::test]
async fn test_index_and_add() {
    let (app, _) = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/add", "name=grace%20hopper"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response.into_body()).await;
    assert!(html.contains("grace hopper"));
}

#[tokio::test]
async fn test_another_page() {
    let (app, _) = setup_app().await;

    let response = app.oneshot(get("/another")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Search handlers: empty query renders empty lists, not an error
// =============================================================================

#[tokio::test]
async fn test_search_empty_query_returns_empty_results() {
    let (app, _) = setup_app().await;

    for uri in [
        "/search_song",
        "/search_album",
        "/search_artist",
        "/search_genre",
        "/search_playlist",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "uri: {}", uri);
        let html = body_text(response.into_body()).await;
        assert!(html.contains("(none)"), "uri {} should render empty list", uri);
    }
}

#[tokio::test]
async fn test_search_song_by_title_lists_playlists() {
    let (app, _) = setup_app().await;

    let response = app
        .oneshot(get("/search_song?song_title=Last%20Nite"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("Last Nite"));
    assert!(html.contains("The Strokes"));
    assert!(html.contains("Is This It"));
    // Playlist lookup keys on the matched song
    assert!(html.contains("Road Trip"));
}

#[tokio::test]
async fn test_search_artist_substring_case_insensitive() {
    let (app, _) = setup_app().await;

    let response = app.oneshot(get("/search_artist?artist_name=strokes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("The Strokes"));
    assert!(!html.contains("Miles Davis"));
}

#[tokio::test]
async fn test_search_album_exact_title_with_artist() {
    let (app, _) = setup_app().await;

    let response = app
        .oneshot(get("/search_album?album_title=Kind%20of%20Blue"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("Kind of Blue"));
    assert!(html.contains("Miles Davis"));
}

#[tokio::test]
async fn test_search_genre_by_path_segment() {
    let (app, _) = setup_app().await;

    let response = app.clone().oneshot(get("/search_g/rock")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response.into_body()).await;
    assert!(html.contains("Rock"));

    // No match is a 404, unlike the query-parameter variant
    let response = app.oneshot(get("/search_g/zydeco")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let text = body_text(response.into_body()).await;
    assert!(text.contains("No genres found matching"));
}

// =============================================================================
// Detail handlers: missing primary row is a plain-text 404
// =============================================================================

#[tokio::test]
async fn test_detail_pages_render_related_rows() {
    let (app, _) = setup_app().await;

    let response = app.clone().oneshot(get("/album/al1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response.into_body()).await;
    assert!(html.contains("Is This It"));
    assert!(html.contains("The Strokes"));
    assert!(html.contains("Last Nite"));
    assert!(html.contains("Someday"));

    let response = app.clone().oneshot(get("/artist/a1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response.into_body()).await;
    assert!(html.contains("Rock"));
    assert!(html.contains("Is This It"));

    let response = app.clone().oneshot(get("/genre/g1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response.into_body()).await;
    assert!(html.contains("The Strokes"));
    assert!(html.contains("Arctic Monkeys"));
    assert!(html.contains("AM"));

    let response = app.oneshot(get("/playlist/p1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response.into_body()).await;
    assert!(html.contains("Road Trip"));
    assert!(html.contains("alice"));
    assert!(html.contains("bob"));
}

#[tokio::test]
async fn test_detail_pages_404_for_unknown_id() {
    let (app, _) = setup_app().await;

    for (uri, message) in [
        ("/album/nope", "Album not found"),
        ("/artist/nope", "Artist not found"),
        ("/genre/nope", "Genre not found"),
        ("/playlist/nope", "Playlist not found"),
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {}", uri);
        assert_eq!(body_text(response.into_body()).await, message);
    }
}

// =============================================================================
// Login / logout / profile
// =============================================================================

/// Log in and return the session cookie pair ("session=<token>")
async fn login_as(app: &axum::Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_form(
            "/login",
            &format!("username={}&password={}", username, password),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("Set-Cookie should carry the session pair")
        .to_string()
}

#[tokio::test]
async fn test_login_success_sets_session_and_redirects_home() {
    let (app, _) = setup_app().await;

    let cookie = login_as(&app, "alice", "wonderland").await;
    assert!(cookie.starts_with("session="));
}

#[tokio::test]
async fn test_login_failure_redirects_back_to_login() {
    let (app, _) = setup_app().await;

    let response = app
        .oneshot(post_form("/login", "username=alice&password=wrong"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_trims_whitespace() {
    let (app, _) = setup_app().await;

    let response = app
        .oneshot(post_form("/login", "username=+alice+&password=+wonderland+"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_profile_requires_matching_session() {
    let (app, _) = setup_app().await;

    // No session at all
    let response = app.clone().oneshot(get("/profile/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    // Session for a different user
    let cookie = login_as(&app, "bob", "builder").await;
    let request = Request::builder()
        .method("GET")
        .uri("/profile/alice")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_profile_renders_history_and_playlists() {
    let (app, _) = setup_app().await;

    let cookie = login_as(&app, "alice", "wonderland").await;
    let request = Request::builder()
        .method("GET")
        .uri("/profile/alice")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("Last Nite")); // listened
    assert!(html.contains("The Strokes")); // followed
    assert!(html.contains("2024-05-01")); // follow date
    assert!(html.contains("Road Trip")); // created playlist
}

#[tokio::test]
async fn test_profile_unknown_user_with_session_is_404() {
    let (app, state) = setup_app().await;

    // Session exists but the users table has no such row
    let token = state.sessions.create("ghost").await;
    let request = Request::builder()
        .method("GET")
        .uri("/profile/ghost")
        .header(header::COOKIE, format!("session={}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let (app, state) = setup_app().await;

    let cookie = login_as(&app, "alice", "wonderland").await;
    let token = cookie.trim_start_matches("session=").to_string();
    assert_eq!(state.sessions.username(&token).await.as_deref(), Some("alice"));

    let request = Request::builder()
        .method("GET")
        .uri("/logout")
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert_eq!(state.sessions.username(&token).await, None);
}

// =============================================================================
// Recommendations: history and follows are excluded
// =============================================================================

#[tokio::test]
async fn test_recommendations_exclude_listened_songs() {
    let (app, _) = setup_app().await;

    let response = app.oneshot(get("/recommendations/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    // alice follows The Strokes (Rock): unheard Rock songs only
    assert!(html.contains("Someday"));
    assert!(html.contains("Do I Wanna Know?"));
    assert!(!html.contains("Last Nite")); // already listened
    assert!(!html.contains("So What")); // Jazz, not a followed genre
}

#[tokio::test]
async fn test_recommend_artists_excludes_followed() {
    let (app, _) = setup_app().await;

    let response = app.oneshot(get("/recommend_artists/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("Arctic Monkeys")); // Rock, not followed
    assert!(!html.contains("The Strokes")); // already followed
    assert!(!html.contains("Miles Davis")); // Jazz
}

#[tokio::test]
async fn test_recommend_playlists_from_followed_artists() {
    let (app, _) = setup_app().await;

    let response = app.oneshot(get("/recommend_playlists/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("Road Trip")); // contains a Strokes song
    assert!(!html.contains("Late Night")); // only Jazz
}

#[tokio::test]
async fn test_recommendations_advisories() {
    let (app, _) = setup_app().await;

    // Unknown user: 404
    let response = app.clone().oneshot(get("/recommendations/ghost")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response.into_body()).await, "User not found");

    // bob follows nothing: plain-text advisories, not errors
    let response = app.clone().oneshot(get("/recommendations/bob")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response.into_body()).await,
        "No genres found for this user"
    );

    let response = app.clone().oneshot(get("/recommend_artists/bob")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response.into_body()).await,
        "No genres found for this user"
    );

    let response = app.oneshot(get("/recommend_playlists/bob")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response.into_body()).await,
        "No artists followed, so no playlist recommendations available."
    );
}

#[tokio::test]
async fn test_recommendations_trim_padded_identifiers() {
    let db = setup_test_db().await;

    // Legacy-style rows with whitespace padding around ids
    for statement in [
        "INSERT INTO users VALUES ('u9 ', 'carol', 'pw', NULL)",
        "INSERT INTO follows VALUES (' u9', 'a1 ', NULL)",
    ] {
        sqlx::query(statement).execute(&db).await.unwrap();
    }

    let state = AppState::new(db);
    let app = build_router(state);

    let response = app.oneshot(get("/recommendations/carol")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response.into_body()).await;
    assert!(html.contains("Someday"), "padded ids should still join");
}
