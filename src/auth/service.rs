use jsonwebtoken::EncodingKey;
use time::Duration;

use crate::{
    auth::{
        password::{hash_password, verify_password},
        token,
    },
    error::{ApiError, ApiResult},
    users::repo::{NewUser, User, UserStore},
};

pub async fn sign_up(users: &dyn UserStore, username: &str, password: &str) -> ApiResult<User> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ApiError::BadRequest("username is required".to_string()));
    }
    if password.is_empty() {
        return Err(ApiError::BadRequest("password is required".to_string()));
    }

    let password_hash = hash_password(password).map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = users
        .insert(NewUser {
            username: username.to_string(),
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "user signed up");
    Ok(user)
}

/// Checks the credentials and issues a bearer token valid for `ttl`.
pub async fn login(
    users: &dyn UserStore,
    username: &str,
    password: &str,
    key: &EncodingKey,
    ttl: Duration,
) -> ApiResult<String> {
    let user = users
        .find_by_username(username.trim())
        .await?
        .ok_or(ApiError::UserNotFound)?;

    let matches = verify_password(password, &user.password_hash)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !matches {
        return Err(ApiError::InvalidPassword);
    }

    let token =
        token::issue_token(user.id, ttl, key).map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::debug!(user_id = %user.id, "token issued");
    Ok(token)
}
