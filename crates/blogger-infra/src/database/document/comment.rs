//! Comment document for MongoDB.

use bson::doc;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use mongodb::IndexModel;
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use blogger_core::domain::{Comment, CommentatorInfo, fields};

use crate::database::StoredDocument;

/// Collection name for comments
pub const COMMENT_COLLECTION: &str = "comments";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentatorDocument {
    pub user_id: ObjectId,
    pub user_login: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub post_id: ObjectId,
    pub content: String,
    pub commentator_info: CommentatorDocument,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl StoredDocument for CommentDocument {
    type Entity = Comment;

    const COLLECTION: &'static str = COMMENT_COLLECTION;

    fn from_entity(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            content: comment.content,
            commentator_info: CommentatorDocument {
                user_id: comment.commentator_info.user_id,
                user_login: comment.commentator_info.user_login,
            },
            created_at: comment.created_at,
        }
    }

    fn into_entity(self) -> Comment {
        Comment {
            id: self.id,
            post_id: self.post_id,
            content: self.content,
            commentator_info: CommentatorInfo {
                user_id: self.commentator_info.user_id,
                user_login: self.commentator_info.user_login,
            },
            created_at: self.created_at,
        }
    }

    fn indexes() -> Vec<IndexModel> {
        let mut keys = doc! {};
        keys.insert(fields::POST_ID, 1);

        vec![
            IndexModel::builder()
                .keys(keys)
                .options(Some(
                    IndexOptions::builder()
                        .name("post_id_index".to_string())
                        .build(),
                ))
                .build(),
        ]
    }
}
