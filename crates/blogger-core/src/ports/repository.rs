use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::{Blog, Comment, Entity, Post, User};
use crate::error::RepoError;
use crate::query::{Filter, PageQuery, Paginated, Sort};

/// Generic repository over one document collection.
///
/// Backends implement the primitive operations; the paginated list contract
/// is provided on top of them.
#[async_trait]
pub trait BaseRepository<T: Entity>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Replace the stored entity with the same id. Returns `false` if none matched.
    async fn replace(&self, entity: T) -> Result<bool, RepoError>;

    /// Hard delete by id. Returns `false` if nothing was deleted.
    async fn delete(&self, id: ObjectId) -> Result<bool, RepoError>;

    /// Matching entities in `sort` order, skipping `skip` and returning at most `limit`.
    async fn find_many(
        &self,
        filter: &Filter,
        sort: &Sort,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<T>, RepoError>;

    /// Number of entities matching `filter`.
    async fn count(&self, filter: &Filter) -> Result<u64, RepoError>;

    /// Remove every entity in the collection.
    async fn delete_all(&self) -> Result<(), RepoError>;

    /// One page of the filtered, sorted collection.
    ///
    /// `total_count` is taken over the whole filtered set, not the page.
    async fn find_page(&self, query: &PageQuery) -> Result<Paginated<T>, RepoError> {
        let items = self
            .find_many(&query.filter, &query.sort, query.skip(), query.page_size)
            .await?;
        let total_count = self.count(&query.filter).await?;

        tracing::debug!(
            entity = T::KIND,
            page = query.page_number,
            page_size = query.page_size,
            total_count,
            "Loaded page"
        );

        Ok(Paginated::new(
            items,
            query.page_number,
            query.page_size,
            total_count,
        ))
    }
}

/// Blog repository.
pub trait BlogRepository: BaseRepository<Blog> {}

/// Post repository.
pub trait PostRepository: BaseRepository<Post> {}

/// Comment repository.
pub trait CommentRepository: BaseRepository<Comment> {}

/// User repository with domain-specific lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User> {
    /// Find a user whose login or email equals `value` exactly.
    async fn find_by_login_or_email(&self, value: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by exact login.
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::BlogFields;

    /// Records the window it was asked for and serves a fixed result.
    struct FixedRepository {
        blogs: Vec<Blog>,
        total: u64,
        seen: Mutex<Option<(u64, u64)>>,
    }

    #[async_trait]
    impl BaseRepository<Blog> for FixedRepository {
        async fn find_by_id(&self, _id: ObjectId) -> Result<Option<Blog>, RepoError> {
            Ok(None)
        }

        async fn insert(&self, entity: Blog) -> Result<Blog, RepoError> {
            Ok(entity)
        }

        async fn replace(&self, _entity: Blog) -> Result<bool, RepoError> {
            Ok(false)
        }

        async fn delete(&self, _id: ObjectId) -> Result<bool, RepoError> {
            Ok(false)
        }

        async fn find_many(
            &self,
            _filter: &Filter,
            _sort: &Sort,
            skip: u64,
            limit: u64,
        ) -> Result<Vec<Blog>, RepoError> {
            *self.seen.lock().unwrap() = Some((skip, limit));
            Ok(self.blogs.clone())
        }

        async fn count(&self, _filter: &Filter) -> Result<u64, RepoError> {
            Ok(self.total)
        }

        async fn delete_all(&self) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_find_page_builds_envelope() {
        let blog = Blog::new(BlogFields {
            name: "rust".to_string(),
            description: "about rust".to_string(),
            website_url: "https://rust.dev".to_string(),
        });
        let repo = FixedRepository {
            blogs: vec![blog.clone()],
            total: 21,
            seen: Mutex::new(None),
        };
        let query = PageQuery {
            page_number: 3,
            page_size: 10,
            ..PageQuery::default()
        };

        let page = repo.find_page(&query).await.unwrap();

        assert_eq!(*repo.seen.lock().unwrap(), Some((20, 10)));
        assert_eq!(page.items, vec![blog]);
        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_count, 21);
        assert_eq!(page.pages_count, 3);
    }
}
