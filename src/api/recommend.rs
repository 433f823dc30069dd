//! Recommendation pages
//!
//! Suggestions derive from the user's follow graph: songs in followed
//! genres not yet listened to, artists in followed genres not yet followed,
//! playlists containing followed artists' songs. An unknown user is a 404;
//! a user with nothing followed gets a plain-text advisory.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::db::recommend;
use crate::error::{ApiError, ApiResult};
use crate::views::{self, escape, link};
use crate::AppState;

async fn resolve_user(state: &AppState, username: &str) -> ApiResult<String> {
    recommend::user_id_for(&state.db, username)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

/// GET /recommendations/:username
///
/// Up to 5 random unheard songs per followed genre.
pub async fn recommend_songs(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Response> {
    let user_id = resolve_user(&state, &username).await?;

    let genre_names = recommend::followed_genre_names(&state.db, &user_id).await?;
    if genre_names.is_empty() {
        return Ok("No genres found for this user".into_response());
    }

    let mut items = Vec::new();
    for genre_name in &genre_names {
        let genre_name = genre_name.trim();
        if genre_name.is_empty() {
            continue;
        }
        debug!("Recommending songs for user {} in genre {}", user_id, genre_name);

        let recommended = recommend::songs_in_genre_unheard(&state.db, genre_name, &user_id).await?;
        items.extend(recommended.iter().map(|rec| {
            format!(
                "{} — {} ({})",
                escape(&rec.song.title),
                escape(&rec.artist_name),
                escape(genre_name),
            )
        }));
    }

    let body = views::list_section("Recommended songs", &items);
    Ok(views::page(&format!("Recommendations for {}", username), &body).into_response())
}

/// GET /recommend_artists/:username
///
/// Up to 5 not-yet-followed artists per followed genre.
pub async fn recommend_artists(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Response> {
    let user_id = resolve_user(&state, &username).await?;

    let genre_ids = recommend::followed_genre_ids(&state.db, &user_id).await?;
    if genre_ids.is_empty() {
        return Ok("No genres found for this user".into_response());
    }

    let mut items = Vec::new();
    for genre_id in &genre_ids {
        let genre_id = genre_id.trim();
        if genre_id.is_empty() {
            continue;
        }

        let recommended =
            recommend::artists_in_genre_unfollowed(&state.db, genre_id, &user_id).await?;
        items.extend(
            recommended
                .iter()
                .map(|artist| link(&format!("/artist/{}", artist.artist_id), &artist.name)),
        );
    }

    let body = views::list_section("Recommended artists", &items);
    Ok(views::page(&format!("Artists for {}", username), &body).into_response())
}

/// GET /recommend_playlists/:username
///
/// Playlists containing songs by artists the user follows.
pub async fn recommend_playlists(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Response> {
    let user_id = resolve_user(&state, &username).await?;

    let followed = recommend::followed_artist_ids(&state.db, &user_id).await?;
    if followed.is_empty() {
        return Ok("No artists followed, so no playlist recommendations available.".into_response());
    }

    let playlists = recommend::playlists_with_followed_artists(&state.db, &user_id).await?;
    let items: Vec<String> = playlists
        .iter()
        .map(|p| link(&format!("/playlist/{}", p.playlist_id), &p.title))
        .collect();

    let body = views::list_section("Recommended playlists", &items);
    Ok(views::page(&format!("Playlists for {}", username), &body).into_response())
}
