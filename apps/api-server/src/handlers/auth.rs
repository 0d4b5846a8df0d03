//! Authentication handlers.

use actix_web::{HttpResponse, web};

use blogger_core::DomainError;
use blogger_shared::dto::{LoginInput, LoginResponse, MeView};

use crate::extractors::ValidatedJson;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: ValidatedJson<LoginInput>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();

    let user = state
        .users
        .check_credentials(&input.login_or_email, &input.password)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let access_token = state
        .tokens
        .generate_token(user.id, &user.login)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::debug!(user_id = %user.id, "User logged in");
    Ok(HttpResponse::Ok().json(LoginResponse { access_token }))
}

/// GET /auth/me - Protected route
pub async fn me(identity: Identity, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    // The token may outlive the account.
    let user = state
        .users
        .get(identity.user_id)
        .await
        .map_err(|e| match e {
            DomainError::NotFound { .. } => AppError::Unauthorized,
            other => other.into(),
        })?;

    Ok(HttpResponse::Ok().json(MeView::from(user)))
}
