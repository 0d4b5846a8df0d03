use std::sync::Arc;

use bson::oid::ObjectId;

use crate::domain::{Comment, Entity, Post, fields};
use crate::error::DomainError;
use crate::ports::{CommentRepository, PostRepository, UserRepository};
use crate::query::{Filter, ListParams, Paginated};

/// Comment use cases. Writes are restricted to the comment's author.
#[derive(Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            comments,
            posts,
            users,
        }
    }

    /// Comments under one post. Fails with NotFound if the post does not exist.
    pub async fn list_for_post(
        &self,
        post_id: ObjectId,
        params: &ListParams,
    ) -> Result<Paginated<Comment>, DomainError> {
        self.ensure_post(post_id).await?;
        let filter = Filter::id_eq(fields::POST_ID, post_id);
        Ok(self.comments.find_page(&params.to_query(filter)).await?)
    }

    pub async fn get(&self, id: ObjectId) -> Result<Comment, DomainError> {
        self.comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Comment::KIND, id))
    }

    /// Comment on a post as `author_id`, copying the author's login.
    pub async fn create(
        &self,
        post_id: ObjectId,
        author_id: ObjectId,
        content: String,
    ) -> Result<Comment, DomainError> {
        self.ensure_post(post_id).await?;

        // A valid token for a user that has since been deleted.
        let author = self
            .users
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let comment = self
            .comments
            .insert(Comment::new(post_id, content, &author))
            .await?;
        tracing::info!(comment_id = %comment.id, post_id = %post_id, "Comment created");
        Ok(comment)
    }

    pub async fn update(
        &self,
        id: ObjectId,
        user_id: ObjectId,
        content: String,
    ) -> Result<(), DomainError> {
        let mut comment = self.owned(id, user_id).await?;
        comment.content = content;

        if !self.comments.replace(comment).await? {
            return Err(DomainError::not_found(Comment::KIND, id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId, user_id: ObjectId) -> Result<(), DomainError> {
        self.owned(id, user_id).await?;

        if !self.comments.delete(id).await? {
            return Err(DomainError::not_found(Comment::KIND, id));
        }
        tracing::info!(comment_id = %id, "Comment deleted");
        Ok(())
    }

    async fn owned(&self, id: ObjectId, user_id: ObjectId) -> Result<Comment, DomainError> {
        let comment = self.get(id).await?;
        if !comment.is_written_by(user_id) {
            return Err(DomainError::Forbidden(format!(
                "comment {} belongs to another user",
                id
            )));
        }
        Ok(comment)
    }

    async fn ensure_post(&self, post_id: ObjectId) -> Result<(), DomainError> {
        match self.posts.find_by_id(post_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found(Post::KIND, post_id)),
        }
    }
}
