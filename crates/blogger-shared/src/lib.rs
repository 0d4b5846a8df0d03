//! # Blogger Shared
//!
//! Wire types of the HTTP API: validated request bodies, public views of the
//! domain entities and error response bodies.

pub mod dto;
pub mod mapper;
pub mod response;
pub mod validation;

pub use response::{ErrorResponse, ValidationErrorResponse};
