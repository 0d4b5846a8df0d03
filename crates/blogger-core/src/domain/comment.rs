use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, User, timestamp};

/// Who wrote a comment. `user_login` is copied at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentatorInfo {
    pub user_id: ObjectId,
    pub user_login: String,
}

/// Comment entity - a user's reply under a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: ObjectId,
    pub post_id: ObjectId,
    pub content: String,
    pub commentator_info: CommentatorInfo,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: ObjectId, content: String, author: &User) -> Self {
        Self {
            id: ObjectId::new(),
            post_id,
            content,
            commentator_info: CommentatorInfo {
                user_id: author.id,
                user_login: author.login.clone(),
            },
            created_at: timestamp(),
        }
    }

    pub fn is_written_by(&self, user_id: ObjectId) -> bool {
        self.commentator_info.user_id == user_id
    }
}

impl Entity for Comment {
    const KIND: &'static str = "Comment";

    fn id(&self) -> ObjectId {
        self.id
    }
}
