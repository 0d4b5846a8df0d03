//! User document for MongoDB.

use bson::doc;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use mongodb::IndexModel;
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use blogger_core::domain::{User, fields};

use crate::database::StoredDocument;

/// Collection name for users
pub const USER_COLLECTION: &str = "users";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub login: String,
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

fn unique_index(field: &str, name: &str) -> IndexModel {
    let mut keys = doc! {};
    keys.insert(field, 1);

    IndexModel::builder()
        .keys(keys)
        .options(Some(
            IndexOptions::builder()
                .unique(true)
                .name(name.to_string())
                .build(),
        ))
        .build()
}

impl StoredDocument for UserDocument {
    type Entity = User;

    const COLLECTION: &'static str = USER_COLLECTION;

    fn from_entity(user: User) -> Self {
        Self {
            id: user.id,
            login: user.login,
            email: user.email,
            password_hash: user.password_hash,
            created_at: user.created_at,
        }
    }

    fn into_entity(self) -> User {
        User {
            id: self.id,
            login: self.login,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }

    fn indexes() -> Vec<IndexModel> {
        vec![
            unique_index(fields::LOGIN, "login_unique"),
            unique_index(fields::EMAIL, "email_unique"),
        ]
    }
}
