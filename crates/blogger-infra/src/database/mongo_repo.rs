//! MongoDB repository implementations.

use async_trait::async_trait;

use blogger_core::domain::{User, fields};
use blogger_core::error::RepoError;
use blogger_core::ports::{BlogRepository, CommentRepository, PostRepository, UserRepository};
use blogger_core::query::{Filter, FilterValue};

use super::document::{BlogDocument, CommentDocument, PostDocument, UserDocument};
use super::mongo_base::{MongoBaseRepository, StoredDocument};
use super::mongo_query::filter_document;

/// MongoDB blog repository.
pub type MongoBlogRepository = MongoBaseRepository<BlogDocument>;

/// MongoDB post repository.
pub type MongoPostRepository = MongoBaseRepository<PostDocument>;

/// MongoDB comment repository.
pub type MongoCommentRepository = MongoBaseRepository<CommentDocument>;

/// MongoDB user repository.
pub type MongoUserRepository = MongoBaseRepository<UserDocument>;

impl BlogRepository for MongoBlogRepository {}

impl PostRepository for MongoPostRepository {}

impl CommentRepository for MongoCommentRepository {}

fn text_eq(field: &'static str, value: &str) -> Filter {
    Filter::Eq {
        field,
        value: FilterValue::Text(value.to_string()),
    }
}

impl MongoUserRepository {
    async fn find_one_by(&self, filter: Filter) -> Result<Option<User>, RepoError> {
        let result = self
            .collection
            .find_one(filter_document(&filter))
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(UserDocument::into_entity))
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_login_or_email(&self, value: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!("Finding user by login or email");
        self.find_one_by(Filter::Or(vec![
            text_eq(fields::LOGIN, value),
            text_eq(fields::EMAIL, value),
        ]))
        .await
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepoError> {
        self.find_one_by(text_eq(fields::LOGIN, login)).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        self.find_one_by(text_eq(fields::EMAIL, email)).await
    }
}
