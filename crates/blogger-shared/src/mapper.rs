//! Entity → public view conversions.

use blogger_core::domain::{Blog, Comment, Post, User};
use chrono::{DateTime, SecondsFormat, Utc};

use crate::dto::{BlogView, CommentView, CommentatorInfoView, MeView, PostView, UserView};

/// ISO 8601 with milliseconds and a `Z` suffix.
fn iso(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<Blog> for BlogView {
    fn from(blog: Blog) -> Self {
        BlogView {
            id: blog.id.to_hex(),
            name: blog.name,
            description: blog.description,
            website_url: blog.website_url,
            created_at: iso(&blog.created_at),
            is_membership: blog.is_membership,
        }
    }
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        PostView {
            id: post.id.to_hex(),
            title: post.title,
            short_description: post.short_description,
            content: post.content,
            blog_id: post.blog_id.to_hex(),
            blog_name: post.blog_name,
            created_at: iso(&post.created_at),
        }
    }
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        CommentView {
            id: comment.id.to_hex(),
            content: comment.content,
            commentator_info: CommentatorInfoView {
                user_id: comment.commentator_info.user_id.to_hex(),
                user_login: comment.commentator_info.user_login,
            },
            created_at: iso(&comment.created_at),
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            id: user.id.to_hex(),
            login: user.login,
            email: user.email,
            created_at: iso(&user.created_at),
        }
    }
}

impl From<User> for MeView {
    fn from(user: User) -> Self {
        MeView {
            email: user.email,
            login: user.login,
            user_id: user.id.to_hex(),
        }
    }
}
