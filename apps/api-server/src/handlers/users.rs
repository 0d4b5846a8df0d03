//! User administration handlers.

use actix_web::{HttpResponse, web};

use blogger_core::ListParams;
use blogger_shared::dto::{UserInput, UserView};

use super::parse_id;
use crate::extractors::ValidatedJson;
use crate::middleware::auth::AdminAuth;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /users
pub async fn list(
    _admin: AdminAuth,
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> AppResult<HttpResponse> {
    let page = state.users.list(&params).await?;
    Ok(HttpResponse::Ok().json(page.map(UserView::from)))
}

/// POST /users
pub async fn create(
    _admin: AdminAuth,
    state: web::Data<AppState>,
    body: ValidatedJson<UserInput>,
) -> AppResult<HttpResponse> {
    let user = state.users.create(body.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(UserView::from(user)))
}

/// DELETE /users/{id}
pub async fn delete(
    _admin: AdminAuth,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "User")?;
    state.users.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
