//! # Blogger Infrastructure
//!
//! Concrete implementations of the ports defined in `blogger-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory repositories only
//! - `mongo` - MongoDB repositories
//! - `auth` - JWT + Argon2 authentication

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::{
    InMemoryBlogRepository, InMemoryCommentRepository, InMemoryPostRepository,
    InMemoryUserRepository, MongoConfig,
};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

// Re-exports - MongoDB
#[cfg(feature = "mongo")]
pub use database::{
    MongoBlogRepository, MongoCommentRepository, MongoConnection, MongoPostRepository,
    MongoUserRepository,
};
