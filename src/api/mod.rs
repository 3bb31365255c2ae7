//! Backend Access Layer
//!
//! Typed request functions against the backend, organized by domain. Every
//! call except login attaches `Authorization: Bearer <token>`; the token is
//! passed in explicitly and read from the session at call time.

mod auth;
mod task_type;
mod tree;

pub use auth::*;
pub use task_type::*;
pub use tree::*;

use serde::de::DeserializeOwned;

/// Backend base URL
pub const BASE_URL: &str = "http://192.168.15.4:5253";

pub(crate) fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

pub(crate) fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Decode a response, surfacing the server's message on HTTP errors
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(if body.trim().is_empty() {
            format!("Falha na requisição ({})", status)
        } else {
            body
        });
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}
