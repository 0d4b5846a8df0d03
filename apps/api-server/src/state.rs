//! Application state - shared across all handlers.

use std::sync::Arc;

use blogger_core::ports::{
    BlogRepository, CommentRepository, PasswordService, PostRepository, TokenService,
    UserRepository,
};
use blogger_core::services::{BlogService, CommentService, PostService, PurgeService, UserService};
use blogger_infra::{
    Argon2PasswordService, InMemoryBlogRepository, InMemoryCommentRepository,
    InMemoryPostRepository, InMemoryUserRepository, JwtConfig, JwtTokenService,
};

use crate::config::{AdminCredentials, AppConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: BlogService,
    pub posts: PostService,
    pub comments: CommentService,
    pub users: UserService,
    pub purge: PurgeService,
    pub tokens: Arc<dyn TokenService>,
    pub admin: AdminCredentials,
}

/// One repository per collection, all on the same backend.
struct Repositories {
    blogs: Arc<dyn BlogRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    users: Arc<dyn UserRepository>,
}

impl Repositories {
    fn in_memory() -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }

    #[cfg(feature = "mongo")]
    async fn mongo(config: &blogger_infra::MongoConfig) -> Result<Self, blogger_core::RepoError> {
        use blogger_infra::{
            MongoBlogRepository, MongoCommentRepository, MongoConnection, MongoPostRepository,
            MongoUserRepository,
        };

        let connection = MongoConnection::connect(config).await?;
        let db = connection.database();

        let blogs = MongoBlogRepository::new(db);
        let posts = MongoPostRepository::new(db);
        let comments = MongoCommentRepository::new(db);
        let users = MongoUserRepository::new(db);

        blogs.ensure_indexes().await?;
        posts.ensure_indexes().await?;
        comments.ensure_indexes().await?;
        users.ensure_indexes().await?;

        Ok(Self {
            blogs: Arc::new(blogs),
            posts: Arc::new(posts),
            comments: Arc::new(comments),
            users: Arc::new(users),
        })
    }

    async fn from_config(config: &AppConfig) -> Self {
        #[cfg(feature = "mongo")]
        {
            if let Some(mongo) = &config.mongo {
                match Self::mongo(mongo).await {
                    Ok(repositories) => {
                        tracing::info!(db = %mongo.db_name, "Using MongoDB repositories");
                        return repositories;
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to MongoDB: {}. Using in-memory fallback.",
                            e
                        );
                        return Self::in_memory();
                    }
                }
            }
            tracing::warn!("MONGO_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "mongo"))]
        {
            if config.mongo.is_some() {
                tracing::warn!("MONGO_URL ignored: built without the mongo feature");
            }
            tracing::info!("Running without mongo feature - using in-memory repositories");
        }

        Self::in_memory()
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let repositories = Repositories::from_config(config).await;
        let state = Self::assemble(repositories, config.admin.clone(), config.jwt.clone());
        tracing::info!("Application state initialized");
        state
    }

    /// State over fresh in-memory repositories.
    pub fn in_memory(admin: AdminCredentials, jwt: JwtConfig) -> Self {
        Self::assemble(Repositories::in_memory(), admin, jwt)
    }

    fn assemble(repos: Repositories, admin: AdminCredentials, jwt: JwtConfig) -> Self {
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        Self {
            blogs: BlogService::new(repos.blogs.clone(), repos.posts.clone()),
            posts: PostService::new(repos.posts.clone(), repos.blogs.clone()),
            comments: CommentService::new(
                repos.comments.clone(),
                repos.posts.clone(),
                repos.users.clone(),
            ),
            users: UserService::new(repos.users.clone(), passwords),
            purge: PurgeService::new(repos.blogs, repos.posts, repos.comments, repos.users),
            tokens: Arc::new(JwtTokenService::new(jwt)),
            admin,
        }
    }
}
