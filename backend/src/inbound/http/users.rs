//! User account and login API handlers.
//!
//! ```text
//! GET  /api/users
//! POST /api/users   {"username":"mluukkai","name":"Matti Luukkainen","password":"salainen"}
//! POST /api/login   {"username":"mluukkai","password":"salainen"}
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::UserView;
use crate::domain::{
    Error, LoginCredentials, LoginValidationError, NewUser, UserValidationError,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{required_string, FieldName};
use crate::inbound::http::ApiResult;

/// Outward shape of a user account; never carries the credential hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(format = "uuid")]
    pub id: String,
    pub username: String,
    pub name: String,
    /// Identifiers of the entries this user has created, oldest first.
    pub blogs: Vec<String>,
}

impl From<UserView> for UserResponse {
    fn from(view: UserView) -> Self {
        Self {
            id: view.id.to_string(),
            username: view.username,
            name: view.name,
            blogs: view.blogs.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Registration payload for `POST /api/users`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Login payload for `POST /api/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token response for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
}

fn user_validation_field(error: &UserValidationError) -> &'static str {
    match error {
        UserValidationError::EmptyId | UserValidationError::InvalidId => "id",
        UserValidationError::UsernameTooShort { .. }
        | UserValidationError::UsernameTooLong { .. }
        | UserValidationError::UsernameInvalidCharacters => "username",
        UserValidationError::EmptyDisplayName
        | UserValidationError::DisplayNameTooLong { .. } => "name",
        UserValidationError::PasswordTooShort { .. } => "password",
    }
}

fn map_user_validation_error(error: UserValidationError) -> Error {
    Error::invalid_request(error.to_string())
        .with_details(json!({ "field": user_validation_field(&error) }))
}

fn map_login_validation_error(error: LoginValidationError) -> Error {
    let field = match error {
        LoginValidationError::EmptyUsername => "username",
        LoginValidationError::EmptyPassword => "password",
    };
    Error::invalid_request(error.to_string()).with_details(json!({ "field": field }))
}

fn parse_new_user(payload: CreateUserRequest) -> Result<NewUser, Error> {
    let username = required_string(payload.username, FieldName::new("username"))?;
    let name = required_string(payload.name, FieldName::new("name"))?;
    let password = required_string(payload.password, FieldName::new("password"))?;
    NewUser::try_from_parts(username, name, &password).map_err(map_user_validation_error)
}

/// List every registered user and their authored entries.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let views = state.users_query.list().await?;
    Ok(web::Json(views.into_iter().map(UserResponse::from).collect()))
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Invalid payload", body = Error),
        (status = 409, description = "Username already taken", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser",
    security([])
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = parse_new_user(payload.into_inner())?;
    let view = state.users.register(new_user).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(view)))
}

/// Exchange credentials for a signed bearer token.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Invalid payload", body = Error),
        (status = 401, description = "Invalid credentials", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials = LoginCredentials::try_from_parts(&payload.username, &payload.password)
        .map_err(map_login_validation_error)?;
    let session = state.login.login(credentials).await?;
    Ok(web::Json(LoginResponse {
        token: session.token,
        username: session.username,
        name: session.name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        FixtureTokenCodec, MockBlogsCommand, MockBlogsQuery, MockLoginService, MockUsersCommand,
        MockUsersQuery,
    };
    use crate::domain::{IdentityVerifier, UserId};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;

    fn state_with(users: MockUsersCommand, login_service: MockLoginService) -> web::Data<HttpState> {
        web::Data::new(HttpState {
            blogs_query: Arc::new(MockBlogsQuery::new()),
            blogs: Arc::new(MockBlogsCommand::new()),
            users_query: Arc::new(MockUsersQuery::new()),
            users: Arc::new(users),
            login: Arc::new(login_service),
            identity: IdentityVerifier::new(Arc::new(FixtureTokenCodec)),
        })
    }

    async fn call(
        state: web::Data<HttpState>,
        req: test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new().app_data(state).service(
                web::scope("/api")
                    .service(list_users)
                    .service(create_user)
                    .service(login),
            ),
        )
        .await;
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn registration_returns_the_created_account() {
        let view = UserView {
            id: UserId::random(),
            username: "mluukkai".to_owned(),
            name: "Matti Luukkainen".to_owned(),
            blogs: Vec::new(),
        };

        let mut users = MockUsersCommand::new();
        users
            .expect_register()
            .times(1)
            .return_once(move |_| Ok(view));

        let res = call(
            state_with(users, MockLoginService::new()),
            test::TestRequest::post()
                .uri("/api/users")
                .set_json(CreateUserRequest {
                    username: Some("mluukkai".to_owned()),
                    name: Some("Matti Luukkainen".to_owned()),
                    password: Some("salainen".to_owned()),
                }),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: UserResponse = test::read_body_json(res).await;
        assert_eq!(body.username, "mluukkai");
        assert!(body.blogs.is_empty());
    }

    #[actix_web::test]
    async fn registration_rejects_short_passwords_before_the_service() {
        let mut users = MockUsersCommand::new();
        users.expect_register().times(0);

        let res = call(
            state_with(users, MockLoginService::new()),
            test::TestRequest::post()
                .uri("/api/users")
                .set_json(CreateUserRequest {
                    username: Some("mluukkai".to_owned()),
                    name: Some("Matti Luukkainen".to_owned()),
                    password: Some("pw".to_owned()),
                }),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let value: Value = test::read_body_json(res).await;
        assert_eq!(
            value
                .get("details")
                .and_then(|details| details.get("field"))
                .and_then(Value::as_str),
            Some("password")
        );
    }

    #[actix_web::test]
    async fn login_rejects_blank_usernames_before_the_service() {
        let mut login_service = MockLoginService::new();
        login_service.expect_login().times(0);

        let res = call(
            state_with(MockUsersCommand::new(), login_service),
            test::TestRequest::post().uri("/api/login").set_json(LoginRequest {
                username: "   ".to_owned(),
                password: "salainen".to_owned(),
            }),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let value: Value = test::read_body_json(res).await;
        assert_eq!(
            value
                .get("details")
                .and_then(|details| details.get("field"))
                .and_then(Value::as_str),
            Some("username")
        );
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }
}
