//! User profile page

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::db::{artists, playlists, songs, users};
use crate::error::{ApiError, ApiResult};
use crate::session;
use crate::views::{self, escape, link};
use crate::AppState;

/// GET /profile/:username
///
/// Requires a session matching the username in the path; otherwise redirects
/// to the login page. Renders the user's listening history, followed
/// artists, and created/followed playlists.
pub async fn profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let session_user = match session::session_token(&headers) {
        Some(token) => state.sessions.username(&token).await,
        None => None,
    };
    if session_user.as_deref() != Some(username.as_str()) {
        return Ok(Redirect::to("/login").into_response());
    }

    let user = users::find_by_name(&state.db, &username)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let listened = songs::listened_by(&state.db, &user.user_id).await?;
    let followed = artists::followed_by(&state.db, &user.user_id).await?;
    let created_playlists = playlists::by_user(&state.db, &user.user_id, true).await?;
    let followed_playlists = playlists::by_user(&state.db, &user.user_id, false).await?;

    let song_items: Vec<String> = listened.iter().map(|song| escape(&song.title)).collect();
    let artist_items: Vec<String> = followed
        .iter()
        .map(|f| {
            let since = f
                .follow_date
                .as_deref()
                .map(|d| format!(" (since {})", escape(d)))
                .unwrap_or_default();
            format!(
                "{}{}",
                link(&format!("/artist/{}", f.artist.artist_id), &f.artist.name),
                since
            )
        })
        .collect();
    let playlist_items = |rows: &[crate::db::playlists::Playlist]| -> Vec<String> {
        rows.iter()
            .map(|p| link(&format!("/playlist/{}", p.playlist_id), &p.title))
            .collect()
    };

    let body = format!(
        r#"<p>{} | {} | {}</p>
{}
{}
{}
{}
<p>{}</p>"#,
        link(&format!("/recommendations/{}", user.user_name), "Recommended songs"),
        link(
            &format!("/recommend_artists/{}", user.user_name),
            "Recommended artists"
        ),
        link(
            &format!("/recommend_playlists/{}", user.user_name),
            "Recommended playlists"
        ),
        views::list_section("Listened songs", &song_items),
        views::list_section("Followed artists", &artist_items),
        views::list_section("Created playlists", &playlist_items(&created_playlists)),
        views::list_section("Followed playlists", &playlist_items(&followed_playlists)),
        link("/logout", "Log out"),
    );

    Ok(views::page(&format!("Profile: {}", user.user_name), &body).into_response())
}
