#[cfg(feature = "mongo")]
use std::time::Duration;

#[cfg(feature = "mongo")]
use blogger_core::RepoError;
#[cfg(feature = "mongo")]
use bson::doc;
#[cfg(feature = "mongo")]
use mongodb::{Client, Database, options::ClientOptions};

/// Configuration for the document database.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub url: String,
    pub db_name: String,
}

/// Handle to the application database on a connected MongoDB client.
///
/// Cloning is cheap; the driver shares its connection pool between clones.
#[cfg(feature = "mongo")]
#[derive(Clone)]
pub struct MongoConnection {
    database: Database,
}

#[cfg(feature = "mongo")]
impl MongoConnection {
    /// Connect and verify the server answers a ping.
    pub async fn connect(config: &MongoConfig) -> Result<Self, RepoError> {
        tracing::info!("Connecting to MongoDB...");

        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        // Fail fast instead of hanging when the server is unreachable
        options.server_selection_timeout = Some(Duration::from_secs(3));
        options.connect_timeout = Some(Duration::from_secs(3));
        options.app_name = Some("blogger-api".to_string());

        let client =
            Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;
        let database = client.database(&config.db_name);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepoError::Connection(format!("MongoDB ping failed: {}", e)))?;

        tracing::info!("Connected to MongoDB database '{}'", config.db_name);

        Ok(Self { database })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}
