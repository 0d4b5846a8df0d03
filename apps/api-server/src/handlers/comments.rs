//! Comment handlers. Writes are limited to the comment's author.

use actix_web::{HttpResponse, web};

use blogger_shared::dto::{CommentInput, CommentView};

use super::parse_id;
use crate::extractors::ValidatedJson;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /comments/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "Comment")?;
    let comment = state.comments.get(id).await?;
    Ok(HttpResponse::Ok().json(CommentView::from(comment)))
}

/// PUT /comments/{id}
pub async fn update(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<CommentInput>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "Comment")?;
    state
        .comments
        .update(id, identity.user_id, body.into_inner().content)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /comments/{id}
pub async fn delete(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "Comment")?;
    state.comments.delete(id, identity.user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
