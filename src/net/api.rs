//! REST collaborators for authentication and user data.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: calls return [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call yields a typed [`ApiError`] instead of panicking; the session
//! store decides which failures degrade to "logged out" and which are ignored.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::types::{Credentials, Registration, User};

/// Everything outside the RFC 3986 unreserved set.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Remote session operations.
#[async_trait::async_trait(?Send)]
pub trait AuthService {
    /// Exchange credentials for the signed-in user.
    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError>;

    /// Create an account and return the signed-in user.
    async fn register(&self, registration: &Registration) -> Result<User, ApiError>;

    /// Invalidate the remote session.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Authoritative user profiles.
#[async_trait::async_trait(?Send)]
pub trait DataService {
    /// Fetch the profile for `id`; `Ok(None)` when the service has no such user.
    async fn get_user(&self, id: &str) -> Result<Option<User>, ApiError>;
}

fn login_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

fn register_endpoint(base: &str) -> String {
    format!("{base}/auth/register")
}

fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/logout")
}

fn user_endpoint(base: &str, id: &str) -> String {
    format!("{base}/users/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// `AuthService` backed by the nhau REST API.
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    base: String,
}

impl HttpAuthService {
    pub fn new(base: &str) -> Self {
        Self { base: base.to_owned() }
    }
}

/// `DataService` backed by the nhau REST API.
#[derive(Clone, Debug)]
pub struct HttpDataService {
    base: String,
}

impl HttpDataService {
    pub fn new(base: &str) -> Self {
        Self { base: base.to_owned() }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        post_for_user(&login_endpoint(&self.base), credentials).await
    }

    async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        post_for_user(&register_endpoint(&self.base), registration).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&logout_endpoint(&self.base))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = logout_endpoint(&self.base);
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait::async_trait(?Send)]
impl DataService for HttpDataService {
    async fn get_user(&self, id: &str) -> Result<Option<User>, ApiError> {
        let url = user_endpoint(&self.base, id);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if resp.status() == 404 {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<User>().await.map(Some).map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }
}

async fn post_for_user<B: serde::Serialize>(url: &str, body: &B) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}
