use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use futures::TryStreamExt;
use mongodb::{Collection, Database, IndexModel};
use serde::Serialize;
use serde::de::DeserializeOwned;

use blogger_core::domain::Entity;
use blogger_core::error::RepoError;
use blogger_core::ports::BaseRepository;
use blogger_core::query::{Filter, Sort};

use super::mongo_query::{filter_document, sort_document};

/// Stored shape of an entity in its MongoDB collection.
pub trait StoredDocument:
    Serialize + DeserializeOwned + Unpin + Send + Sync + Sized + 'static
{
    type Entity: Entity;

    /// Collection name.
    const COLLECTION: &'static str;

    fn from_entity(entity: Self::Entity) -> Self;

    fn into_entity(self) -> Self::Entity;

    /// Indexes to ensure on startup.
    fn indexes() -> Vec<IndexModel> {
        Vec::new()
    }
}

fn query_error(err: mongodb::error::Error) -> RepoError {
    RepoError::Query(err.to_string())
}

/// Generic MongoDB repository implementation.
pub struct MongoBaseRepository<D>
where
    D: StoredDocument,
{
    pub(crate) collection: Collection<D>,
}

impl<D> MongoBaseRepository<D>
where
    D: StoredDocument,
{
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<D>(D::COLLECTION),
        }
    }

    /// Create the document type's indexes if they are missing.
    pub async fn ensure_indexes(&self) -> Result<(), RepoError> {
        let indexes = D::indexes();
        if indexes.is_empty() {
            return Ok(());
        }

        self.collection
            .create_indexes(indexes)
            .await
            .map_err(query_error)?;

        tracing::debug!(collection = D::COLLECTION, "Indexes ensured");
        Ok(())
    }
}

#[async_trait]
impl<D> BaseRepository<D::Entity> for MongoBaseRepository<D>
where
    D: StoredDocument,
{
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<D::Entity>, RepoError> {
        let result = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(query_error)?;

        Ok(result.map(D::into_entity))
    }

    async fn insert(&self, entity: D::Entity) -> Result<D::Entity, RepoError> {
        self.collection
            .insert_one(D::from_entity(entity.clone()))
            .await
            .map_err(query_error)?;

        Ok(entity)
    }

    async fn replace(&self, entity: D::Entity) -> Result<bool, RepoError> {
        let id = entity.id();
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, D::from_entity(entity))
            .await
            .map_err(query_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, RepoError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(query_error)?;

        Ok(result.deleted_count > 0)
    }

    async fn find_many(
        &self,
        filter: &Filter,
        sort: &Sort,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<D::Entity>, RepoError> {
        let cursor = self
            .collection
            .find(filter_document(filter))
            .sort(sort_document(sort))
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await
            .map_err(query_error)?;

        let documents: Vec<D> = cursor.try_collect().await.map_err(query_error)?;
        Ok(documents.into_iter().map(D::into_entity).collect())
    }

    async fn count(&self, filter: &Filter) -> Result<u64, RepoError> {
        self.collection
            .count_documents(filter_document(filter))
            .await
            .map_err(query_error)
    }

    async fn delete_all(&self) -> Result<(), RepoError> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .map_err(query_error)?;

        tracing::debug!(
            collection = D::COLLECTION,
            deleted = result.deleted_count,
            "Collection cleared"
        );
        Ok(())
    }
}
