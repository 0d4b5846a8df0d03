use std::sync::Arc;

use crate::error::DomainError;
use crate::ports::{BlogRepository, CommentRepository, PostRepository, UserRepository};

/// Wipes every collection. Backs the testing endpoint.
#[derive(Clone)]
pub struct PurgeService {
    blogs: Arc<dyn BlogRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    users: Arc<dyn UserRepository>,
}

impl PurgeService {
    pub fn new(
        blogs: Arc<dyn BlogRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            blogs,
            posts,
            comments,
            users,
        }
    }

    pub async fn purge_all(&self) -> Result<(), DomainError> {
        self.comments.delete_all().await?;
        self.posts.delete_all().await?;
        self.blogs.delete_all().await?;
        self.users.delete_all().await?;
        tracing::warn!("All collections purged");
        Ok(())
    }
}
