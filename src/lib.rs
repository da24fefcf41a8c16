use jsonwebtoken::{DecodingKey, EncodingKey};
use time::Duration;

use crate::storage::Storage;

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
mod extractors;
pub mod health;
pub mod notes;
pub mod storage;
pub mod users;

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub jwt_enc: EncodingKey,
    pub jwt_dec: DecodingKey,
    pub token_ttl: Duration,
    /// When false, `/notes` is open and global and no auth routes are mounted.
    pub require_auth: bool,
}

impl AppState {
    pub fn new(storage: Storage, jwt_secret: &str, token_ttl: Duration, require_auth: bool) -> Self {
        Self {
            storage,
            jwt_enc: EncodingKey::from_secret(jwt_secret.as_bytes()),
            jwt_dec: DecodingKey::from_secret(jwt_secret.as_bytes()),
            token_ttl,
            require_auth,
        }
    }
}
