//! Post handlers, including the post-scoped comment routes.

use actix_web::{HttpResponse, web};

use blogger_core::ListParams;
use blogger_core::domain::fields;
use blogger_shared::dto::{CommentInput, CommentView, PostInput, PostView};
use blogger_shared::validation::field_errors;
use validator::Validate;

use super::parse_id;
use crate::extractors::{JsonBody, ValidatedJson};
use crate::middleware::auth::{AdminAuth, Identity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Run the body rules. When they fail, `blogId` is resolved as well so an
/// unknown blog is reported alongside the other fields.
async fn checked(state: &AppState, body: JsonBody<PostInput>) -> AppResult<PostInput> {
    let input = body.into_inner();
    let Err(rules) = input.validate() else {
        return Ok(input);
    };

    let mut errors = field_errors(&rules);
    if !errors.iter().any(|e| e.field == fields::BLOG_ID) {
        errors.extend(state.posts.blog_errors(&input.blog_id).await?);
        errors.sort_by(|a, b| a.field.cmp(&b.field));
    }
    Err(AppError::Validation(errors))
}

/// GET /posts
pub async fn list(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let page = state.posts.list(&params).await?;
    Ok(HttpResponse::Ok().json(page.map(PostView::from)))
}

/// POST /posts
pub async fn create(
    _admin: AdminAuth,
    state: web::Data<AppState>,
    body: JsonBody<PostInput>,
) -> AppResult<HttpResponse> {
    let (blog_id, fields) = checked(&state, body).await?.into_parts();
    let post = state.posts.create(&blog_id, fields).await?;
    Ok(HttpResponse::Created().json(PostView::from(post)))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "Post")?;
    let post = state.posts.get(id).await?;
    Ok(HttpResponse::Ok().json(PostView::from(post)))
}

/// PUT /posts/{id}
pub async fn update(
    _admin: AdminAuth,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody<PostInput>,
) -> AppResult<HttpResponse> {
    let (blog_id, fields) = checked(&state, body).await?.into_parts();
    let id = parse_id(&path, "Post")?;
    state.posts.update(id, &blog_id, fields).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete(
    _admin: AdminAuth,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "Post")?;
    state.posts.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /posts/{post_id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path, "Post")?;
    let page = state.comments.list_for_post(post_id, &params).await?;
    Ok(HttpResponse::Ok().json(page.map(CommentView::from)))
}

/// POST /posts/{post_id}/comments
pub async fn create_comment(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<CommentInput>,
) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path, "Post")?;
    let comment = state
        .comments
        .create(post_id, identity.user_id, body.into_inner().content)
        .await?;
    Ok(HttpResponse::Created().json(CommentView::from(comment)))
}
