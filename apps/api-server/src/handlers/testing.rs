//! Test support routes.

use actix_web::{HttpResponse, web};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// DELETE /testing/all-data
pub async fn delete_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.purge.purge_all().await?;
    Ok(HttpResponse::NoContent().finish())
}
