//! Cookie-based session store
//!
//! Server-side state is a single logged-in username per session token. The
//! token travels in a `session` cookie; the store itself is an in-process
//! map, so sessions do not survive a restart and carry no expiry.

use axum::http::{header, HeaderMap};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Shared session store (token -> username)
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStore {
    /// Create an empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for `username` and return the new token
    pub async fn create(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.inner
            .write()
            .await
            .insert(token.clone(), username.to_string());
        token
    }

    /// Look up the username bound to a token
    pub async fn username(&self, token: &str) -> Option<String> {
        self.inner.read().await.get(token).cloned()
    }

    /// Drop a session
    pub async fn remove(&self, token: &str) {
        self.inner.write().await.remove(token);
    }
}

/// Extract the session token from the request's Cookie header
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Set-Cookie value establishing a session
pub fn set_cookie(token: &str) -> String {
    format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, token)
}

/// Set-Cookie value clearing the session cookie
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_create_and_lookup() {
        let store = SessionStore::new();
        let token = store.create("alice").await;

        assert_eq!(store.username(&token).await.as_deref(), Some("alice"));
        assert_eq!(store.username("bogus-token").await, None);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = SessionStore::new();
        let token = store.create("bob").await;
        store.remove(&token).await;

        assert_eq!(store.username(&token).await, None);
    }

    #[test]
    fn test_session_token_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; session=abc123; lang=en"),
        );

        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_token_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));

        assert_eq!(session_token(&headers), None);
        assert_eq!(session_token(&HeaderMap::new()), None);
    }
}
