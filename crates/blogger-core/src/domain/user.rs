use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, timestamp};

/// User entity - an account that can log in and comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ObjectId,
    pub login: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration data with the plain text password, before hashing.
#[derive(Clone)]
pub struct NewUser {
    pub login: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Create a new user with generated id and timestamp.
    pub fn new(login: String, email: String, password_hash: String) -> Self {
        Self {
            id: ObjectId::new(),
            login,
            email,
            password_hash,
            created_at: timestamp(),
        }
    }
}

impl Entity for User {
    const KIND: &'static str = "User";

    fn id(&self) -> ObjectId {
        self.id
    }
}
