//! Auth Requests

use serde::Serialize;

use super::{client, parse_json, url};
use crate::models::LoginResponse;

#[derive(Serialize)]
struct LoginArgs<'a> {
    mail: &'a str,
    password: &'a str,
}

/// Exchange credentials for a token + profile. The only unauthenticated call.
pub async fn login(mail: &str, password: &str) -> Result<LoginResponse, String> {
    let response = client()
        .post(url("/auth/Login"))
        .json(&LoginArgs { mail, password })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}
