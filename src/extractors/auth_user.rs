use axum::{extract::FromRequestParts, http::header};
use uuid::Uuid;

use crate::{
    AppState,
    auth::token::{AuthError, bearer_token, verify_token},
    error::ApiError,
    notes::repo::NoteScope,
};

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Missing => ApiError::Unauthorized,
            AuthError::Invalid => ApiError::Forbidden,
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let token = bearer_token(header)?;
        let claims = verify_token(token, &state.jwt_dec)?;

        Ok(AuthUser { id: claims.sub })
    }
}

/// Owner scope behind the auth gate, global scope when auth is switched off.
impl FromRequestParts<AppState> for NoteScope {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.require_auth {
            return Ok(NoteScope::Global);
        }

        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(NoteScope::Owner(user.id))
    }
}
