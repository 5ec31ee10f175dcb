//! REST API helpers for communicating with the survey backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display-ready messages instead of panics
//! so a failed login degrades to an inline message on the login page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use survey_session::Identity;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[cfg(any(test, feature = "csr"))]
fn login_failed_message(status: u16) -> String {
    match status {
        401 | 403 => "Invalid username or password.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

/// Exchange credentials for an identity via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server rejects the
/// credentials, or the response is not an identity.
pub async fn login(username: &str, password: &str) -> Result<Identity, String> {
    let payload = LoginRequest { username, password };
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<Identity>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err("not available outside the browser".to_owned())
    }
}
