//! Authentication extractors.
//!
//! [`AdminAuth`] guards the administrative routes with HTTP Basic auth
//! against the configured credential pair. [`Identity`] requires a user
//! access token in a `Bearer` header.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::future::{Ready, ready};

use blogger_core::ObjectId;
use blogger_core::ports::{AuthError, TokenClaims};
use blogger_shared::ErrorResponse;

use crate::config::AdminCredentials;
use crate::state::AppState;

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let error = match &self.0 {
            AuthError::TokenExpired => ErrorResponse::unauthorized()
                .with_detail("Your access token has expired. Please login again."),
            AuthError::InvalidToken(msg) => ErrorResponse::unauthorized().with_detail(msg.clone()),
            AuthError::InvalidCredentials => {
                ErrorResponse::unauthorized().with_detail("Invalid credentials.")
            }
            _ => ErrorResponse::unauthorized()
                .with_detail("Missing or malformed Authorization header."),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

fn app_state(req: &HttpRequest) -> Result<&web::Data<AppState>, AuthenticationError> {
    req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState not found in app data");
        AuthenticationError(AuthError::InvalidToken(
            "Server configuration error".to_string(),
        ))
    })
}

/// Credentials of the `Authorization` header for `scheme`, if present.
fn authorization<'a>(req: &'a HttpRequest, scheme: &str) -> Result<&'a str, AuthError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?
        .to_str()
        .map_err(|_| AuthError::MissingAuth)?;

    let (given, credentials) = value.split_once(' ').ok_or(AuthError::MissingAuth)?;
    if !given.eq_ignore_ascii_case(scheme) {
        return Err(AuthError::MissingAuth);
    }
    Ok(credentials.trim())
}

/// Decode a Basic credential into `(login, password)`.
fn decode_basic(encoded: &str) -> Result<(String, String), AuthError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|_| AuthError::InvalidCredentials)?;
    let decoded = String::from_utf8(bytes).map_err(|_| AuthError::InvalidCredentials)?;
    let (login, password) = decoded
        .split_once(':')
        .ok_or(AuthError::InvalidCredentials)?;
    Ok((login.to_string(), password.to_string()))
}

fn check_admin(req: &HttpRequest, admin: &AdminCredentials) -> Result<(), AuthError> {
    let (login, password) = decode_basic(authorization(req, "Basic")?)?;
    if login == admin.login && password == admin.password {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Proof that the request carried the admin Basic credentials.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

impl FromRequest for AdminAuth {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = app_state(req).and_then(|state| {
            check_admin(req, &state.admin).map_err(|e| {
                tracing::debug!(error = %e, "Admin authentication failed");
                AuthenticationError(e)
            })
        });

        ready(result.map(|()| AdminAuth))
    }
}

/// Authenticated user identity extractor.
///
/// Use this in handlers to require a user access token:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.login)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: ObjectId,
    pub login: String,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            login: claims.login,
        }
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = app_state(req).and_then(|state| {
            let token = authorization(req, "Bearer").map_err(AuthenticationError)?;
            state
                .tokens
                .validate_token(token)
                .map(Identity::from)
                .map_err(AuthenticationError)
        });

        ready(result)
    }
}
