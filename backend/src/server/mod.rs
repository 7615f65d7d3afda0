//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::ports::TokenCodec;
use backend::domain::{BlogService, IdentityVerifier, UserService};
use backend::inbound::http::blogs::{create_blog, delete_blog, list_blogs, update_blog};
use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::{create_user, list_users, login};
use backend::outbound::persistence::{MemoryBlogRepository, MemoryUserRepository};
use backend::outbound::security::{BcryptPasswordHasher, HsTokenCodec};
use backend::Trace;

/// Wire the adapters and services into the handler state bundle.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let blogs = Arc::new(MemoryBlogRepository::new());
    let users = Arc::new(MemoryUserRepository::new());
    let tokens = Arc::new(HsTokenCodec::new(&config.token_secret, config.token_ttl));
    let hasher = Arc::new(BcryptPasswordHasher::new());

    let blog_service = Arc::new(BlogService::with_update_policy(
        blogs,
        Arc::clone(&users),
        config.update_policy,
    ));
    let user_service = Arc::new(UserService::new(users, hasher, Arc::clone(&tokens)));

    web::Data::new(HttpState {
        blogs_query: blog_service.clone(),
        blogs: blog_service,
        users_query: user_service.clone(),
        users: user_service.clone(),
        login: user_service,
        identity: IdentityVerifier::new(tokens as Arc<dyn TokenCodec>),
    })
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_blogs)
        .service(create_blog)
        .service(update_blog)
        .service(delete_blog)
        .service(list_users)
        .service(create_user)
        .service(login);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the bootstrap configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr();
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
