use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    auth::{
        http::{LoginRequest, LoginResponse, SignUpRequest, SignUpResponse},
        service,
    },
    error::ApiResult,
};

#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "User created", body = SignUpResponse),
        (status = 400, description = "Blank username or password", body = crate::error::ErrorBody),
        (status = 409, description = "Username already exists", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> ApiResult<(StatusCode, Json<SignUpResponse>)> {
    let user = service::sign_up(state.storage.users.as_ref(), &req.username, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            message: "User Created",
            user: user.into(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token", body = LoginResponse),
        (status = 400, description = "User not found or invalid password", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(StatusCode, Json<LoginResponse>)> {
    let token = service::login(
        state.storage.users.as_ref(),
        &req.username,
        &req.password,
        &state.jwt_enc,
        state.token_ttl,
    )
    .await?;

    Ok((StatusCode::OK, Json(LoginResponse { token })))
}
