//! HTTP handlers for tunebase

pub mod auth;
pub mod detail;
pub mod health;
pub mod home;
pub mod profile;
pub mod recommend;
pub mod search;

pub use auth::{login, login_page, logout};
pub use detail::{album_details, artist_details, genre_details, playlist_details};
pub use health::health_routes;
pub use home::{add_name, another, index};
pub use profile::profile;
pub use recommend::{recommend_artists, recommend_playlists, recommend_songs};
pub use search::{
    search_album, search_artist, search_genre, search_genre_named, search_playlist, search_song,
};
