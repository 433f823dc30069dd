//! Search pages
//!
//! Each handler reads an optional query parameter, runs a filter query and
//! renders a result list. Absent or empty parameters render an empty list
//! rather than erroring.

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::db::{albums, artists, genres, playlists, songs};
use crate::error::{ApiError, ApiResult};
use crate::views::{self, escape, link};
use crate::AppState;

/// Query parameters for song search
#[derive(Debug, Deserialize)]
pub struct SongQuery {
    pub song_title: Option<String>,
    pub song_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumQuery {
    pub album_title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistQuery {
    pub artist_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    pub genre_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistQuery {
    pub playlist_title: Option<String>,
}

fn search_form(action: &str, field: &str, placeholder: &str) -> String {
    format!(
        r#"<form method="get" action="{}">
    <input type="text" name="{}" placeholder="{}">
    <button type="submit">Search</button>
</form>"#,
        action, field, placeholder
    )
}

fn non_empty(param: &Option<String>) -> Option<&str> {
    param.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// GET /search_song?song_title=&song_id=
///
/// Finds a song by id or exact title and lists the playlists containing it.
pub async fn search_song(
    State(state): State<AppState>,
    Query(query): Query<SongQuery>,
) -> ApiResult<Html<String>> {
    let song_id = non_empty(&query.song_id);
    let song_title = non_empty(&query.song_title);

    let mut hits = Vec::new();
    let mut playlist_rows = Vec::new();

    if song_id.is_some() || song_title.is_some() {
        hits = songs::search(&state.db, song_id, song_title).await?;

        // When searching by title, the playlist lookup keys on the first hit
        let lookup_id = song_id
            .map(str::to_string)
            .or_else(|| hits.first().map(|hit| hit.song.song_id.clone()));
        if let Some(id) = lookup_id {
            playlist_rows = playlists::containing_song(&state.db, &id).await?;
        }
    }

    let song_items: Vec<String> = hits
        .iter()
        .map(|hit| {
            format!(
                "{} — {} (album: {}, genre: {})",
                escape(&hit.song.title),
                link(&format!("/artist/{}", hit.artist_id), &hit.artist_name),
                link(&format!("/album/{}", hit.album_id), &hit.album_title),
                hit.song
                    .genre
                    .as_deref()
                    .map(|g| link(&format!("/search_g/{}", g.trim()), g))
                    .unwrap_or_else(|| "unknown".to_string()),
            )
        })
        .collect();

    let playlist_items: Vec<String> = playlist_rows
        .iter()
        .map(|p| link(&format!("/playlist/{}", p.playlist_id), &p.title))
        .collect();

    let body = format!(
        "{}\n{}\n{}",
        search_form("/search_song", "song_title", "Song title"),
        views::list_section("Songs", &song_items),
        views::list_section("In playlists", &playlist_items),
    );

    Ok(views::page("Song search", &body))
}

/// GET /search_album?album_title=
pub async fn search_album(
    State(state): State<AppState>,
    Query(query): Query<AlbumQuery>,
) -> ApiResult<Html<String>> {
    let hits = match non_empty(&query.album_title) {
        Some(title) => albums::search_by_title(&state.db, title).await?,
        None => Vec::new(),
    };

    let items: Vec<String> = hits
        .iter()
        .map(|hit| {
            format!(
                "{} — {}",
                link(&format!("/album/{}", hit.album.album_id), &hit.album.title),
                escape(&hit.artist_name),
            )
        })
        .collect();

    let body = format!(
        "{}\n{}",
        search_form("/search_album", "album_title", "Album title"),
        views::list_section("Albums", &items),
    );

    Ok(views::page("Album search", &body))
}

/// GET /search_artist?artist_name=
pub async fn search_artist(
    State(state): State<AppState>,
    Query(query): Query<ArtistQuery>,
) -> ApiResult<Html<String>> {
    let hits = match non_empty(&query.artist_name) {
        Some(name) => artists::search_by_name(&state.db, name).await?,
        None => Vec::new(),
    };

    let items: Vec<String> = hits
        .iter()
        .map(|artist| link(&format!("/artist/{}", artist.artist_id), &artist.name))
        .collect();

    let body = format!(
        "{}\n{}",
        search_form("/search_artist", "artist_name", "Artist name"),
        views::list_section("Artists", &items),
    );

    Ok(views::page("Artist search", &body))
}

fn genre_items(hits: &[genres::Genre]) -> Vec<String> {
    hits.iter()
        .map(|genre| link(&format!("/genre/{}", genre.genre_id), &genre.name))
        .collect()
}

/// GET /search_genre?genre_name=
pub async fn search_genre(
    State(state): State<AppState>,
    Query(query): Query<GenreQuery>,
) -> ApiResult<Html<String>> {
    let hits = match non_empty(&query.genre_name) {
        Some(name) => genres::search_by_name(&state.db, name).await?,
        None => Vec::new(),
    };

    let body = format!(
        "{}\n{}",
        search_form("/search_genre", "genre_name", "Genre name"),
        views::list_section("Genres", &genre_items(&hits)),
    );

    Ok(views::page("Genre search", &body))
}

/// GET /search_g/:genre_name
///
/// Same query as /search_genre but keyed by path segment, used to link song
/// pages to genre pages. No match is a 404 rather than an empty page.
pub async fn search_genre_named(
    State(state): State<AppState>,
    Path(genre_name): Path<String>,
) -> ApiResult<Html<String>> {
    let hits = genres::search_by_name(&state.db, genre_name.trim()).await?;

    if hits.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No genres found matching: {}",
            genre_name
        )));
    }

    let body = format!(
        "{}\n{}",
        search_form("/search_genre", "genre_name", "Genre name"),
        views::list_section("Genres", &genre_items(&hits)),
    );

    Ok(views::page("Genre search", &body))
}

/// GET /search_playlist?playlist_title=
pub async fn search_playlist(
    State(state): State<AppState>,
    Query(query): Query<PlaylistQuery>,
) -> ApiResult<Html<String>> {
    let hits = match non_empty(&query.playlist_title) {
        Some(title) => playlists::search_by_title(&state.db, title).await?,
        None => Vec::new(),
    };

    let items: Vec<String> = hits
        .iter()
        .map(|p| link(&format!("/playlist/{}", p.playlist_id), &p.title))
        .collect();

    let body = format!(
        "{}\n{}",
        search_form("/search_playlist", "playlist_title", "Playlist title"),
        views::list_section("Playlists", &items),
    );

    Ok(views::page("Playlist search", &body))
}
