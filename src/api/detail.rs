//! Entity detail pages
//!
//! Each handler runs a primary lookup plus related-row queries and renders a
//! detail page; an absent primary row is a plain-text 404.

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::db::{albums, artists, genres, playlists, songs};
use crate::error::{ApiError, ApiResult};
use crate::views::{self, escape, link};
use crate::AppState;

fn song_items(rows: &[songs::Song]) -> Vec<String> {
    rows.iter()
        .map(|song| {
            let duration = song
                .duration_seconds
                .map(|secs| format!(" ({}:{:02})", secs / 60, secs % 60))
                .unwrap_or_default();
            format!("{}{}", escape(&song.title), duration)
        })
        .collect()
}

/// GET /album/:album_id
pub async fn album_details(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
) -> ApiResult<Html<String>> {
    let details = albums::details(&state.db, &album_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Album not found".to_string()))?;

    let album_songs = songs::in_album(&state.db, &album_id).await?;

    let mut facts = vec![format!(
        "Artist: {}",
        link(
            &format!("/artist/{}", details.album.artist_id),
            &details.artist_name
        )
    )];
    if let Some(genre) = &details.album.genre {
        facts.push(format!(
            "Genre: {}",
            link(&format!("/search_g/{}", genre.trim()), genre)
        ));
    }
    if let Some(genre_name) = &details.genre_name {
        facts.push(format!("Artist genre: {}", escape(genre_name)));
    }
    if let Some(year) = details.album.release_year {
        facts.push(format!("Released: {}", year));
    }

    let body = format!(
        "{}\n{}",
        views::list_section("Details", &facts),
        views::list_section("Songs", &song_items(&album_songs)),
    );

    Ok(views::page(&details.album.title, &body))
}

/// GET /artist/:artist_id
pub async fn artist_details(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> ApiResult<Html<String>> {
    let artist = artists::get(&state.db, &artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Artist not found".to_string()))?;

    let genre_rows = artists::genres_of(&state.db, &artist_id).await?;
    let album_rows = albums::by_artist(&state.db, &artist_id).await?;
    let song_rows = songs::by_artist(&state.db, &artist_id).await?;

    let genre_items: Vec<String> = genre_rows
        .iter()
        .map(|genre| link(&format!("/genre/{}", genre.genre_id), &genre.name))
        .collect();
    let album_items: Vec<String> = album_rows
        .iter()
        .map(|album| link(&format!("/album/{}", album.album_id), &album.title))
        .collect();

    let body = format!(
        "{}\n{}\n{}",
        views::list_section("Genres", &genre_items),
        views::list_section("Albums", &album_items),
        views::list_section("Songs", &song_items(&song_rows)),
    );

    Ok(views::page(&artist.name, &body))
}

/// GET /genre/:genre_id
pub async fn genre_details(
    State(state): State<AppState>,
    Path(genre_id): Path<String>,
) -> ApiResult<Html<String>> {
    let genre = genres::get(&state.db, &genre_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Genre not found".to_string()))?;

    let artist_rows = artists::in_genre(&state.db, &genre_id).await?;
    let album_rows = albums::in_genre(&state.db, &genre_id).await?;
    let song_rows = songs::in_genre(&state.db, &genre_id).await?;

    let artist_items: Vec<String> = artist_rows
        .iter()
        .map(|artist| link(&format!("/artist/{}", artist.artist_id), &artist.name))
        .collect();
    let album_items: Vec<String> = album_rows
        .iter()
        .map(|album| link(&format!("/album/{}", album.album_id), &album.title))
        .collect();

    let body = format!(
        "{}\n{}\n{}",
        views::list_section("Artists", &artist_items),
        views::list_section("Albums", &album_items),
        views::list_section("Songs", &song_items(&song_rows)),
    );

    Ok(views::page(&genre.name, &body))
}

/// GET /playlist/:playlist_id
pub async fn playlist_details(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> ApiResult<Html<String>> {
    let playlist = playlists::get(&state.db, &playlist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;

    let song_rows = songs::in_playlist(&state.db, &playlist_id).await?;
    let creator = playlists::creator(&state.db, &playlist_id).await?;
    let follower_rows = playlists::followers(&state.db, &playlist_id).await?;

    let creator_line = match creator {
        Some(user) => format!("Created by: {}", escape(&user.user_name)),
        None => "Created by: unknown".to_string(),
    };
    let follower_items: Vec<String> = follower_rows
        .iter()
        .map(|user| escape(&user.user_name))
        .collect();

    let body = format!(
        "<p>{}</p>\n{}\n{}",
        creator_line,
        views::list_section("Songs", &song_items(&song_rows)),
        views::list_section("Followers", &follower_items),
    );

    Ok(views::page(&playlist.title, &body))
}
