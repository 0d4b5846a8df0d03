//! # Blogger Core
//!
//! The domain layer of the blogger platform.
//! Entities, ports, the paginated query contract and the services built on top of them.
//! No infrastructure dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;
pub mod services;

pub use bson::oid::ObjectId;
pub use error::{DomainError, FieldError, RepoError};
pub use query::{Filter, ListParams, PageQuery, Paginated, Sort, SortDirection};
