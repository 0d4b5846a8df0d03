//! Domain entities - the core business objects.

mod blog;
mod comment;
mod post;
mod user;

use bson::oid::ObjectId;
use chrono::{DateTime, SubsecRound, Utc};

pub use blog::{Blog, BlogFields};
pub use comment::{Comment, CommentatorInfo};
pub use post::{Post, PostFields};
pub use user::{NewUser, User};

/// Stored field names, shared by filters, sorting and the document mappings.
pub mod fields {
    pub const CREATED_AT: &str = "createdAt";
    pub const NAME: &str = "name";
    pub const LOGIN: &str = "login";
    pub const EMAIL: &str = "email";
    pub const BLOG_ID: &str = "blogId";
    pub const POST_ID: &str = "postId";
}

/// Anything persisted in its own collection.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human readable entity name, used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> ObjectId;
}

/// Creation timestamp with the millisecond precision the document store keeps.
pub fn timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
