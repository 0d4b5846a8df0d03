use std::sync::Arc;

use bson::oid::ObjectId;

use crate::domain::{Blog, BlogFields, Entity, Post, PostFields, fields};
use crate::error::DomainError;
use crate::ports::{BlogRepository, PostRepository};
use crate::query::{Filter, ListParams, Paginated};

/// Blog use cases, including the blog-scoped post endpoints.
#[derive(Clone)]
pub struct BlogService {
    blogs: Arc<dyn BlogRepository>,
    posts: Arc<dyn PostRepository>,
}

impl BlogService {
    pub fn new(blogs: Arc<dyn BlogRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { blogs, posts }
    }

    /// Blogs page, optionally narrowed by `searchNameTerm`.
    pub async fn list(&self, params: &ListParams) -> Result<Paginated<Blog>, DomainError> {
        let filter = Filter::search([(fields::NAME, params.search_name_term.as_deref())]);
        Ok(self.blogs.find_page(&params.to_query(filter)).await?)
    }

    pub async fn get(&self, id: ObjectId) -> Result<Blog, DomainError> {
        self.blogs
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Blog::KIND, id))
    }

    pub async fn create(&self, fields: BlogFields) -> Result<Blog, DomainError> {
        let blog = self.blogs.insert(Blog::new(fields)).await?;
        tracing::info!(blog_id = %blog.id, "Blog created");
        Ok(blog)
    }

    /// Overwrite the editable fields. Posts keep the blog name they copied.
    pub async fn update(&self, id: ObjectId, fields: BlogFields) -> Result<(), DomainError> {
        let mut blog = self.get(id).await?;
        blog.apply(fields);

        if !self.blogs.replace(blog).await? {
            return Err(DomainError::not_found(Blog::KIND, id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: ObjectId) -> Result<(), DomainError> {
        if !self.blogs.delete(id).await? {
            return Err(DomainError::not_found(Blog::KIND, id));
        }
        tracing::info!(blog_id = %id, "Blog deleted");
        Ok(())
    }

    /// Posts of one blog. Fails with NotFound if the blog does not exist.
    pub async fn list_posts(
        &self,
        blog_id: ObjectId,
        params: &ListParams,
    ) -> Result<Paginated<Post>, DomainError> {
        self.get(blog_id).await?;
        let filter = Filter::id_eq(fields::BLOG_ID, blog_id);
        Ok(self.posts.find_page(&params.to_query(filter)).await?)
    }

    /// Create a post inside an existing blog, copying its current name.
    pub async fn create_post(
        &self,
        blog_id: ObjectId,
        fields: PostFields,
    ) -> Result<Post, DomainError> {
        let blog = self.get(blog_id).await?;
        let post = self.posts.insert(Post::new(fields, &blog)).await?;
        tracing::info!(post_id = %post.id, blog_id = %blog.id, "Post created");
        Ok(post)
    }
}
