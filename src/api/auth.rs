//! Login/logout routes
//!
//! Credentials are compared in plaintext against the users table, as the
//! legacy dataset stores them. A successful login binds the username to a
//! session token carried in a cookie.

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    http::HeaderMap,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::db::users;
use crate::error::ApiResult;
use crate::session;
use crate::views;
use crate::AppState;

/// Login form payload
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /login
pub async fn login_page() -> Html<String> {
    views::page(
        "Login",
        r#"<form method="post" action="/login">
    <p><input type="text" name="username" placeholder="Username"></p>
    <p><input type="password" name="password" placeholder="Password"></p>
    <button type="submit">Log in</button>
</form>"#,
    )
}

/// POST /login
///
/// Matching credentials set the session and redirect home; anything else
/// redirects back to the form.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Response> {
    let username = form.username.trim();
    let password = form.password.trim();

    match users::authenticate(&state.db, username, password).await? {
        Some(user) => {
            let token = state.sessions.create(&user.user_name).await;
            info!("User {} logged in", user.user_name);
            Ok((
                AppendHeaders([(SET_COOKIE, session::set_cookie(&token))]),
                Redirect::to("/"),
            )
                .into_response())
        }
        None => Ok(Redirect::to("/login").into_response()),
    }
}

/// GET /logout
///
/// Drops the session (if any) and clears the cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session::session_token(&headers) {
        state.sessions.remove(&token).await;
    }

    (
        AppendHeaders([(SET_COOKIE, session::clear_cookie())]),
        Redirect::to("/"),
    )
        .into_response()
}
