//! OpenAPI document served by the Swagger UI in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Public OpenAPI surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::update_blog,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::inbound::http::blogs::BlogResponse,
        crate::inbound::http::blogs::OwnerResponse,
        crate::inbound::http::blogs::CreateBlogRequest,
        crate::inbound::http::blogs::UpdateBlogRequest,
        crate::inbound::http::users::UserResponse,
        crate::inbound::http::users::CreateUserRequest,
        crate::inbound::http::users::LoginRequest,
        crate::inbound::http::users::LoginResponse,
        crate::domain::Error,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "blogs", description = "Blog entry management"),
        (name = "users", description = "Accounts and login"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_registers_the_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.security_schemes.contains_key("BearerToken"));
    }

    #[test]
    fn document_covers_the_blog_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/blogs"));
        assert!(doc.paths.paths.contains_key("/api/blogs/{id}"));
    }
}
