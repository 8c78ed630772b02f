use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use super::error::AuthError;
use crate::shared::api_utils::api_url;

pub async fn login(username: String, password: String) -> Result<LoginResponse, AuthError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)?
        .send()
        .await?;

    if !response.ok() {
        return Err(AuthError::Status(response.status()));
    }

    Ok(response.json::<LoginResponse>().await?)
}

pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, AuthError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/refresh"))
        .json(&request)?
        .send()
        .await?;

    if !response.ok() {
        return Err(AuthError::Status(response.status()));
    }

    Ok(response.json::<RefreshResponse>().await?)
}

/// Revokes the refresh token on the server.
pub async fn logout(refresh_token: String) -> Result<(), AuthError> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&api_url("/api/system/auth/logout"))
        .json(&request)?
        .send()
        .await?;

    if !response.ok() {
        return Err(AuthError::Status(response.status()));
    }

    Ok(())
}

pub async fn current_user(access_token: &str) -> Result<UserInfo, AuthError> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await?;

    if !response.ok() {
        return Err(AuthError::Status(response.status()));
    }

    Ok(response.json::<UserInfo>().await?)
}
