//! Blog document for MongoDB.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blogger_core::domain::Blog;

use crate::database::StoredDocument;

/// Collection name for blogs
pub const BLOG_COLLECTION: &str = "blogs";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub website_url: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_membership: bool,
}

impl StoredDocument for BlogDocument {
    type Entity = Blog;

    const COLLECTION: &'static str = BLOG_COLLECTION;

    fn from_entity(blog: Blog) -> Self {
        Self {
            id: blog.id,
            name: blog.name,
            description: blog.description,
            website_url: blog.website_url,
            created_at: blog.created_at,
            is_membership: blog.is_membership,
        }
    }

    fn into_entity(self) -> Blog {
        Blog {
            id: self.id,
            name: self.name,
            description: self.description,
            website_url: self.website_url,
            created_at: self.created_at,
            is_membership: self.is_membership,
        }
    }
}
