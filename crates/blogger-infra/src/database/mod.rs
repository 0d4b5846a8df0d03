//! Document store access - MongoDB repositories and the in-memory fallback.

mod connections;
pub mod memory;

#[cfg(feature = "mongo")]
pub mod document;
#[cfg(feature = "mongo")]
mod mongo_base;
#[cfg(feature = "mongo")]
pub mod mongo_query;
#[cfg(feature = "mongo")]
pub mod mongo_repo;

pub use connections::MongoConfig;
pub use memory::{
    InMemoryBaseRepository, InMemoryBlogRepository, InMemoryCommentRepository,
    InMemoryPostRepository, InMemoryUserRepository,
};

#[cfg(feature = "mongo")]
pub use connections::MongoConnection;
#[cfg(feature = "mongo")]
pub use mongo_base::{MongoBaseRepository, StoredDocument};
#[cfg(feature = "mongo")]
pub use mongo_repo::{
    MongoBlogRepository, MongoCommentRepository, MongoPostRepository, MongoUserRepository,
};

#[cfg(feature = "mongo")]
#[cfg(test)]
mod tests;
