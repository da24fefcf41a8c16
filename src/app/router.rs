use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;
use crate::app::docs;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new().merge(crate::health::http::routes());
    if state.require_auth {
        router = router.merge(crate::auth::http::routes());
    }

    router
        .nest("/notes", crate::notes::http::routes())
        .route("/docs", get(docs::swagger_ui))
        .route("/api-docs/openapi.json", get(docs::openapi_spec))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
