use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Blog, Entity, timestamp};

/// Post entity - an article published in a blog.
///
/// `blog_name` is a copy of the parent blog's name taken when the post is
/// written. Renaming the blog afterwards does not touch existing posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: ObjectId,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub blog_id: ObjectId,
    pub blog_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub short_description: String,
    pub content: String,
}

impl Post {
    /// Create a new post inside `blog`.
    pub fn new(fields: PostFields, blog: &Blog) -> Self {
        Self {
            id: ObjectId::new(),
            title: fields.title,
            short_description: fields.short_description,
            content: fields.content,
            blog_id: blog.id,
            blog_name: blog.name.clone(),
            created_at: timestamp(),
        }
    }

    /// Overwrite the editable fields and re-point the post at `blog`.
    pub fn apply(&mut self, fields: PostFields, blog: &Blog) {
        self.title = fields.title;
        self.short_description = fields.short_description;
        self.content = fields.content;
        self.blog_id = blog.id;
        self.blog_name = blog.name.clone();
    }
}

impl Entity for Post {
    const KIND: &'static str = "Post";

    fn id(&self) -> ObjectId {
        self.id
    }
}
