//! Auth and profile endpoints.

use gloo_net::http::Method;
use serde::Serialize;

use crate::services::api::{api_request, fetch_json, send};
use crate::services::token::set_token;
use crate::types::{ApiError, ApiResult, ApiUser, TokenResponse, User};

/// `POST /auth/register` body.
#[derive(Debug, Serialize)]
struct RegisterPayload<'a> {
    email: &'a str,
    password: &'a str,
    full_name: &'a str,
}

/// `PUT /users/me` body.
#[derive(Debug, Serialize)]
pub struct ProfileUpdate<'a> {
    pub full_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
    pub bio: &'a str,
}

/// `PUT /users/me/password` body.
#[derive(Debug, Serialize)]
struct PasswordChange<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

fn form_encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

/// Log in with form-encoded credentials, store the returned token, then
/// resolve the freshly authenticated user.
pub async fn login(email: &str, password: &str) -> ApiResult<User> {
    let body = format!(
        "username={}&password={}",
        form_encode(email),
        form_encode(password)
    );

    let request = api_request(Method::POST, "/auth/login")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let response: TokenResponse = fetch_json(request).await?;
    let access_token = response
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingToken)?;

    set_token(Some(&access_token));
    current_user().await
}

/// Register an account, then log in with the same credentials to
/// establish a session.
pub async fn signup(email: &str, username: &str, password: &str) -> ApiResult<User> {
    let payload = RegisterPayload {
        email,
        password,
        full_name: username,
    };

    let request = api_request(Method::POST, "/auth/register")
        .json(&payload)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await?;

    login(email, password).await
}

/// Server-side session revocation. Callers treat failure as non-fatal.
pub async fn logout() -> ApiResult<()> {
    let request = api_request(Method::POST, "/auth/logout")
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await?;
    Ok(())
}

/// Resolve the current session via `GET /users/me`.
pub async fn current_user() -> ApiResult<User> {
    let request = api_request(Method::GET, "/users/me")
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let payload: ApiUser = fetch_json(request).await?;
    Ok(payload.into_user())
}

/// Persist profile changes and return the updated, normalized user.
pub async fn update_profile(update: &ProfileUpdate<'_>) -> ApiResult<User> {
    let request = api_request(Method::PUT, "/users/me")
        .json(update)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let payload: ApiUser = fetch_json(request).await?;
    Ok(payload.into_user())
}

/// Change the account password.
pub async fn change_password(old_password: &str, new_password: &str) -> ApiResult<()> {
    let payload = PasswordChange {
        old_password,
        new_password,
    };

    let request = api_request(Method::PUT, "/users/me/password")
        .json(&payload)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_update_omits_absent_username() {
        let update = ProfileUpdate {
            full_name: "Ana Silva",
            username: None,
            bio: "olá",
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"full_name":"Ana Silva","bio":"olá"}"#);
    }

    #[test]
    fn register_payload_uses_full_name_field() {
        let payload = RegisterPayload {
            email: "a@b.c",
            password: "s3cret",
            full_name: "ana",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["full_name"], "ana");
        assert!(value.get("username").is_none());
    }
}
