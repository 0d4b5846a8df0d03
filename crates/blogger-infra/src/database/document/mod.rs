//! Stored document shapes and their conversions to domain entities.

mod blog;
mod comment;
mod post;
mod user;

pub use blog::{BLOG_COLLECTION, BlogDocument};
pub use comment::{COMMENT_COLLECTION, CommentDocument, CommentatorDocument};
pub use post::{POST_COLLECTION, PostDocument};
pub use user::{USER_COLLECTION, UserDocument};
