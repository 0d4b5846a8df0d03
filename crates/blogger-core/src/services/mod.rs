//! Application services - use cases orchestrating one or more repositories.

mod blog_service;
mod comment_service;
mod post_service;
mod purge_service;
mod user_service;

pub use blog_service::BlogService;
pub use comment_service::CommentService;
pub use post_service::PostService;
pub use purge_service::PurgeService;
pub use user_service::UserService;
