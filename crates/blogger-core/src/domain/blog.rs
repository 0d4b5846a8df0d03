use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, timestamp};

/// Blog entity - a named collection of posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub created_at: DateTime<Utc>,
    pub is_membership: bool,
}

/// The user-editable part of a blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogFields {
    pub name: String,
    pub description: String,
    pub website_url: String,
}

impl Blog {
    /// Create a new blog with a fresh id and creation timestamp.
    pub fn new(fields: BlogFields) -> Self {
        Self {
            id: ObjectId::new(),
            name: fields.name,
            description: fields.description,
            website_url: fields.website_url,
            created_at: timestamp(),
            is_membership: false,
        }
    }

    /// Overwrite the editable fields, keeping id and creation time.
    pub fn apply(&mut self, fields: BlogFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.website_url = fields.website_url;
    }
}

impl Entity for Blog {
    const KIND: &'static str = "Blog";

    fn id(&self) -> ObjectId {
        self.id
    }
}
