//! Blog handlers, including the blog-scoped post routes.

use actix_web::{HttpResponse, web};

use blogger_core::ListParams;
use blogger_shared::dto::{BlogInput, BlogPostInput, BlogView, PostView};

use super::parse_id;
use crate::extractors::ValidatedJson;
use crate::middleware::auth::AdminAuth;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /blogs
pub async fn list(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let page = state.blogs.list(&params).await?;
    Ok(HttpResponse::Ok().json(page.map(BlogView::from)))
}

/// POST /blogs
pub async fn create(
    _admin: AdminAuth,
    state: web::Data<AppState>,
    body: ValidatedJson<BlogInput>,
) -> AppResult<HttpResponse> {
    let blog = state.blogs.create(body.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(BlogView::from(blog)))
}

/// GET /blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "Blog")?;
    let blog = state.blogs.get(id).await?;
    Ok(HttpResponse::Ok().json(BlogView::from(blog)))
}

/// PUT /blogs/{id}
pub async fn update(
    _admin: AdminAuth,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<BlogInput>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "Blog")?;
    state.blogs.update(id, body.into_inner().into()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blogs/{id}
pub async fn delete(
    _admin: AdminAuth,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "Blog")?;
    state.blogs.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /blogs/{blog_id}/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let blog_id = parse_id(&path, "Blog")?;
    let page = state.blogs.list_posts(blog_id, &params).await?;
    Ok(HttpResponse::Ok().json(page.map(PostView::from)))
}

/// POST /blogs/{blog_id}/posts
pub async fn create_post(
    _admin: AdminAuth,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<BlogPostInput>,
) -> AppResult<HttpResponse> {
    let blog_id = parse_id(&path, "Blog")?;
    let post = state
        .blogs
        .create_post(blog_id, body.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(PostView::from(post)))
}
