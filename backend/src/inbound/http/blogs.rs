//! Blog entry API handlers.
//!
//! ```text
//! GET    /api/blogs
//! POST   /api/blogs
//! PUT    /api/blogs/{id}
//! DELETE /api/blogs/{id}
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{BlogOwner, BlogView};
use crate::domain::{BlogChanges, BlogUrl, Error, Likes, NewBlog, Title};
use crate::inbound::http::auth::BearerAuth;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    invalid_field_error, parse_blog_id, required_string, FieldName,
};
use crate::inbound::http::ApiResult;

/// Owner reference embedded in a blog response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
}

impl From<BlogOwner> for OwnerResponse {
    fn from(owner: BlogOwner) -> Self {
        Self {
            id: owner.id.to_string(),
            name: owner.name,
        }
    }
}

/// Outward shape of a blog entry.
///
/// The persistence identifier is always exposed as `id`; no raw store key
/// ever leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    #[schema(format = "uuid")]
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user: Option<OwnerResponse>,
}

impl From<BlogView> for BlogResponse {
    fn from(view: BlogView) -> Self {
        Self {
            id: view.id.to_string(),
            title: view.title,
            author: view.author,
            url: view.url,
            likes: view.likes,
            user: view.owner.map(OwnerResponse::from),
        }
    }
}

/// Request payload for creating a blog entry.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

/// Request payload for updating a blog entry; absent fields keep their value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

fn parse_new_blog(payload: CreateBlogRequest) -> Result<NewBlog, Error> {
    let title = required_string(payload.title, FieldName::new("title"))?;
    let url = required_string(payload.url, FieldName::new("url"))?;
    let title =
        Title::new(title).map_err(|error| invalid_field_error(FieldName::new("title"), error))?;
    let url =
        BlogUrl::new(url).map_err(|error| invalid_field_error(FieldName::new("url"), error))?;
    Ok(NewBlog::new(
        title,
        payload.author,
        url,
        payload.likes.map(Likes::new),
    ))
}

fn parse_changes(payload: UpdateBlogRequest) -> Result<BlogChanges, Error> {
    let title = payload
        .title
        .map(Title::new)
        .transpose()
        .map_err(|error| invalid_field_error(FieldName::new("title"), error))?;
    let url = payload
        .url
        .map(BlogUrl::new)
        .transpose()
        .map_err(|error| invalid_field_error(FieldName::new("url"), error))?;
    Ok(BlogChanges {
        title,
        author: payload.author,
        url,
        likes: payload.likes.map(Likes::new),
    })
}

/// List every blog entry with its owner attached.
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "All blog entries", body = [BlogResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "listBlogs",
    security([])
)]
#[get("/blogs")]
pub async fn list_blogs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BlogResponse>>> {
    let views = state.blogs_query.list().await?;
    Ok(web::Json(views.into_iter().map(BlogResponse::from).collect()))
}

/// Create a blog entry owned by the authenticated caller.
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Entry created", body = BlogResponse),
        (status = 400, description = "Invalid payload", body = Error),
        (status = 401, description = "Token missing or invalid", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "createBlog",
    security(("BearerToken" = []))
)]
#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    auth: BearerAuth,
    payload: web::Json<CreateBlogRequest>,
) -> ApiResult<HttpResponse> {
    let identity = state.identity.resolve(auth.header())?;
    let draft = parse_new_blog(payload.into_inner())?;
    let view = state.blogs.create(identity, draft).await?;
    Ok(HttpResponse::Created().json(BlogResponse::from(view)))
}

/// Update the mutable fields of an existing entry.
///
/// Whether a credential is required is decided by the service's update
/// ownership policy; by default none is needed and the header is ignored.
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    request_body = UpdateBlogRequest,
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "Updated entry", body = BlogResponse),
        (status = 400, description = "Malformed identifier or payload", body = Error),
        (status = 401, description = "Token required by the enforced policy", body = Error),
        (status = 403, description = "Caller does not own the entry", body = Error),
        (status = 404, description = "No matching entry", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "updateBlog",
    security([])
)]
#[put("/blogs/{id}")]
pub async fn update_blog(
    state: web::Data<HttpState>,
    auth: BearerAuth,
    path: web::Path<String>,
    payload: web::Json<UpdateBlogRequest>,
) -> ApiResult<web::Json<BlogResponse>> {
    let caller = state.identity.resolve_lenient(auth.header());
    let id = parse_blog_id(&path.into_inner())?;
    let changes = parse_changes(payload.into_inner())?;
    let view = state.blogs.update(caller, id, changes).await?;
    Ok(web::Json(BlogResponse::from(view)))
}

/// Delete an entry; only its creator may do so.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 401, description = "Token missing or invalid", body = Error),
        (status = 403, description = "Caller is not the creator", body = Error),
        (status = 404, description = "No matching entry", body = Error)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog",
    security(("BearerToken" = []))
)]
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    auth: BearerAuth,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    // Reject missing or invalid credentials before even looking at the id.
    let identity = state.identity.resolve(auth.header())?;
    let id = parse_blog_id(&path.into_inner())?;
    state.blogs.delete(identity, id).await?;
    Ok(HttpResponse::NoContent().finish())
}
