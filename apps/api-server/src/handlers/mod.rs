//! HTTP handlers and route configuration.

mod auth;
mod blogs;
mod comments;
mod posts;
mod testing;
mod users;


use actix_web::web;
use blogger_core::ObjectId;

use crate::middleware::error::{AppError, AppResult};

/// Parse a path identifier. Malformed ids cannot exist, so they are NotFound.
fn parse_id(raw: &str, kind: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("{} with id {} not found", kind, raw)))
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blogs")
            .route("", web::get().to(blogs::list))
            .route("", web::post().to(blogs::create))
            .route("/{id}", web::get().to(blogs::get))
            .route("/{id}", web::put().to(blogs::update))
            .route("/{id}", web::delete().to(blogs::delete))
            .route("/{blog_id}/posts", web::get().to(blogs::list_posts))
            .route("/{blog_id}/posts", web::post().to(blogs::create_post)),
    )
    .service(
        web::scope("/posts")
            .route("", web::get().to(posts::list))
            .route("", web::post().to(posts::create))
            .route("/{id}", web::get().to(posts::get))
            .route("/{id}", web::put().to(posts::update))
            .route("/{id}", web::delete().to(posts::delete))
            .route("/{post_id}/comments", web::get().to(posts::list_comments))
            .route("/{post_id}/comments", web::post().to(posts::create_comment)),
    )
    .service(
        web::scope("/comments")
            .route("/{id}", web::get().to(comments::get))
            .route("/{id}", web::put().to(comments::update))
            .route("/{id}", web::delete().to(comments::delete)),
    )
    .service(
        web::scope("/users")
            .route("", web::get().to(users::list))
            .route("", web::post().to(users::create))
            .route("/{id}", web::delete().to(users::delete)),
    )
    .service(
        web::scope("/auth")
            .route("/login", web::post().to(auth::login))
            .route("/me", web::get().to(auth::me)),
    )
    .service(web::scope("/testing").route("/all-data", web::delete().to(testing::delete_all)));
}
