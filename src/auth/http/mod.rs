use axum::{Router, routing::post};

use crate::AppState;

mod dto;
pub(crate) mod handlers;

pub use dto::{LoginRequest, LoginResponse, SignUpRequest, SignUpResponse, UserDto};
pub use handlers::{login, sign_up};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", post(login))
}
