//! Post document for MongoDB.

use bson::doc;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use mongodb::IndexModel;
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use blogger_core::domain::{Post, fields};

use crate::database::StoredDocument;

/// Collection name for posts
pub const POST_COLLECTION: &str = "posts";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub blog_id: ObjectId,
    /// Copy of the blog's name at write time
    pub blog_name: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl StoredDocument for PostDocument {
    type Entity = Post;

    const COLLECTION: &'static str = POST_COLLECTION;

    fn from_entity(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            short_description: post.short_description,
            content: post.content,
            blog_id: post.blog_id,
            blog_name: post.blog_name,
            created_at: post.created_at,
        }
    }

    fn into_entity(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            short_description: self.short_description,
            content: self.content,
            blog_id: self.blog_id,
            blog_name: self.blog_name,
            created_at: self.created_at,
        }
    }

    fn indexes() -> Vec<IndexModel> {
        let mut keys = doc! {};
        keys.insert(fields::BLOG_ID, 1);

        vec![
            IndexModel::builder()
                .keys(keys)
                .options(Some(
                    IndexOptions::builder()
                        .name("blog_id_index".to_string())
                        .build(),
                ))
                .build(),
        ]
    }
}
