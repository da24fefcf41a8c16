use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health::http::handlers::health,
        crate::health::http::handlers::db_health,
        crate::auth::http::handlers::sign_up,
        crate::auth::http::handlers::login,
        crate::notes::http::handlers::create_note,
        crate::notes::http::handlers::list_notes,
        crate::notes::http::handlers::get_note,
        crate::notes::http::handlers::update_note,
        crate::notes::http::handlers::delete_note
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::auth::http::SignUpRequest,
        crate::auth::http::SignUpResponse,
        crate::auth::http::UserDto,
        crate::auth::http::LoginRequest,
        crate::auth::http::LoginResponse,
        crate::notes::http::CreateNoteRequest,
        crate::notes::http::UpdateNoteRequest,
        crate::notes::http::NoteDto,
        crate::notes::http::NoteCreatedResponse,
        crate::notes::http::NoteResponse,
        crate::notes::http::NotesResponse,
        crate::notes::http::MessageResponse
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Core", description = "Service health endpoints"),
        (name = "Auth", description = "Sign-up and login"),
        (name = "Notes", description = "Notes endpoints")
    )
)]
pub struct ApiDoc;
