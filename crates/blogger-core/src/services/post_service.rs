use std::sync::Arc;

use bson::oid::ObjectId;

use crate::domain::{Blog, Entity, Post, PostFields, fields};
use crate::error::{DomainError, FieldError};
use crate::ports::{BlogRepository, PostRepository};
use crate::query::{Filter, ListParams, Paginated};

/// Post use cases.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    blogs: Arc<dyn BlogRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, blogs: Arc<dyn BlogRepository>) -> Self {
        Self { posts, blogs }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Paginated<Post>, DomainError> {
        Ok(self.posts.find_page(&params.to_query(Filter::All)).await?)
    }

    pub async fn get(&self, id: ObjectId) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Post::KIND, id))
    }

    /// Create a post in the blog referenced by `blog_id`.
    ///
    /// An unknown or malformed blog id is an input error on `blogId`.
    pub async fn create(&self, blog_id: &str, fields: PostFields) -> Result<Post, DomainError> {
        let blog = self.resolve_blog(blog_id).await?;
        let post = self.posts.insert(Post::new(fields, &blog)).await?;
        tracing::info!(post_id = %post.id, blog_id = %blog.id, "Post created");
        Ok(post)
    }

    /// Overwrite the post, re-resolving its blog and copying the blog's current name.
    pub async fn update(
        &self,
        id: ObjectId,
        blog_id: &str,
        fields: PostFields,
    ) -> Result<(), DomainError> {
        let blog = self.resolve_blog(blog_id).await?;
        let mut post = self.get(id).await?;
        post.apply(fields, &blog);

        if !self.posts.replace(post).await? {
            return Err(DomainError::not_found(Post::KIND, id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId) -> Result<(), DomainError> {
        if !self.posts.delete(id).await? {
            return Err(DomainError::not_found(Post::KIND, id));
        }
        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    /// Input errors on `blogId` when it does not name an existing blog.
    pub async fn blog_errors(&self, blog_id: &str) -> Result<Vec<FieldError>, DomainError> {
        match self.resolve_blog(blog_id).await {
            Ok(_) => Ok(Vec::new()),
            Err(DomainError::Validation(errors)) => Ok(errors),
            Err(e) => Err(e),
        }
    }

    async fn resolve_blog(&self, blog_id: &str) -> Result<Blog, DomainError> {
        let missing = || DomainError::invalid_field(fields::BLOG_ID, "blog not found");

        let id = ObjectId::parse_str(blog_id.trim()).map_err(|_| missing())?;
        self.blogs.find_by_id(id).await?.ok_or_else(missing)
    }
}
