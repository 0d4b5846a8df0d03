//! Validated JSON extractor - Combines deserialization with validation.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use validator::Validate;

use blogger_shared::validation::field_errors;

use crate::middleware::error::AppError;

/// JSON body deserialized but not yet validated.
///
/// A body that is not valid JSON for `T` is reported against the `body` field.
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);

        async move {
            let web::Json(value) = json.await.map_err(|e| {
                tracing::debug!(error = %e, "Rejected request body");
                AppError::field("body", e.to_string())
            })?;
            Ok(JsonBody(value))
        }
        .boxed_local()
    }
}

/// JSON body that has passed its `validator` rules.
///
/// Every failing field is reported once in the `errorsMessages` body.
///
/// ```rust,ignore
/// async fn create(ValidatedJson(input): ValidatedJson<BlogInput>) -> AppResult<HttpResponse> {
///     // input is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = JsonBody::<T>::from_request(req, payload);

        async move {
            let JsonBody(value) = body.await?;

            value
                .validate()
                .map_err(|e| AppError::Validation(field_errors(&e)))?;

            Ok(ValidatedJson(value))
        }
        .boxed_local()
    }
}
