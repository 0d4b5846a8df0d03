//! Data Transfer Objects - request/response types for the API.
//!
//! Request bodies default missing or wrongly typed fields to empty strings so
//! that they are reported as field errors rather than a malformed body.

use blogger_core::domain::{BlogFields, NewUser, PostFields};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{LOGIN, WEBSITE_URL, not_blank, text, trimmed};

/// Body of `POST /blogs` and `PUT /blogs/:id`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogInput {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 15, message = "name should be 1 to 15 characters"))]
    pub name: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 500,
        message = "description should be 1 to 500 characters"
    ))]
    pub description: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 100, message = "websiteUrl should be 1 to 100 characters"),
        regex(path = *WEBSITE_URL, message = "websiteUrl should be a valid https URL")
    )]
    pub website_url: String,
}

impl From<BlogInput> for BlogFields {
    fn from(input: BlogInput) -> Self {
        BlogFields {
            name: input.name,
            description: input.description,
            website_url: input.website_url,
        }
    }
}

/// Body of `POST /blogs/:blogId/posts`. The blog comes from the path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPostInput {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 30, message = "title should be 1 to 30 characters"))]
    pub title: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 100,
        message = "shortDescription should be 1 to 100 characters"
    ))]
    pub short_description: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 1000, message = "content should be 1 to 1000 characters"))]
    pub content: String,
}

impl From<BlogPostInput> for PostFields {
    fn from(input: BlogPostInput) -> Self {
        PostFields {
            title: input.title,
            short_description: input.short_description,
            content: input.content,
        }
    }
}

/// Body of `POST /posts` and `PUT /posts/:id`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct PostInput {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 30, message = "title should be 1 to 30 characters"))]
    pub title: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 1,
        max = 100,
        message = "shortDescription should be 1 to 100 characters"
    ))]
    pub short_description: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 1000, message = "content should be 1 to 1000 characters"))]
    pub content: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "blogId is required"))]
    pub blog_id: String,
}

impl PostInput {
    /// Split into the referenced blog id and the post's own fields.
    pub fn into_parts(self) -> (String, PostFields) {
        (
            self.blog_id,
            PostFields {
                title: self.title,
                short_description: self.short_description,
                content: self.content,
            },
        )
    }
}

/// Body of `POST /posts/:postId/comments` and `PUT /comments/:id`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentInput {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 20, max = 300, message = "content should be 20 to 300 characters"))]
    pub content: String,
}

/// Body of `POST /users`.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UserInput {
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 3, max = 10, message = "login should be 3 to 10 characters"),
        regex(path = *LOGIN, message = "login may contain only letters, digits, _ and -")
    )]
    pub login: String,

    #[serde(deserialize_with = "text")]
    #[validate(length(min = 6, max = 20, message = "password should be 6 to 20 characters"))]
    pub password: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "email should be a valid address"))]
    pub email: String,
}

impl From<UserInput> for NewUser {
    fn from(input: UserInput) -> Self {
        NewUser {
            login: input.login,
            email: input.email,
            password: input.password,
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginInput {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "loginOrEmail is required"))]
    pub login_or_email: String,

    #[serde(deserialize_with = "text")]
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

/// Response of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Public view of a blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub created_at: String,
    pub is_membership: bool,
}

/// Public view of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub content: String,
    pub blog_id: String,
    pub blog_name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentatorInfoView {
    pub user_id: String,
    pub user_login: String,
}

/// Public view of a comment. The owning post is implied by the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub content: String,
    pub commentator_info: CommentatorInfoView,
    pub created_at: String,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub login: String,
    pub email: String,
    pub created_at: String,
}

/// The authenticated user, as returned by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeView {
    pub email: String,
    pub login: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::field_errors;
    use serde_json::json;

    fn fields_of<T: Validate>(input: &T) -> Vec<String> {
        match input.validate() {
            Ok(()) => vec![],
            Err(e) => field_errors(&e).into_iter().map(|f| f.field).collect(),
        }
    }

    #[test]
    fn test_valid_blog_input_is_trimmed() {
        let input: BlogInput = serde_json::from_value(json!({
            "name": "  rust  ",
            "description": "all about rust",
            "websiteUrl": "https://rust-lang.org"
        }))
        .unwrap();

        assert!(input.validate().is_ok());
        assert_eq!(BlogFields::from(input).name, "rust");
    }

    #[test]
    fn test_blog_input_reports_each_bad_field_once() {
        let input: BlogInput = serde_json::from_value(json!({
            "name": "   ",
            "description": "ok",
            "websiteUrl": "x".repeat(101)
        }))
        .unwrap();

        let errors = field_errors(&input.validate().unwrap_err());
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "websiteUrl"]);
    }

    #[test]
    fn test_blog_input_rejects_plain_http() {
        let input = BlogInput {
            name: "n".into(),
            description: "d".into(),
            website_url: "http://example.com".into(),
        };
        assert_eq!(fields_of(&input), vec!["websiteUrl"]);
    }

    #[test]
    fn test_missing_fields_are_field_errors() {
        let input: PostInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(
            fields_of(&input),
            vec!["blogId", "content", "shortDescription", "title"]
        );
    }

    #[test]
    fn test_post_input_limits() {
        let input: PostInput = serde_json::from_value(json!({
            "title": "t".repeat(31),
            "shortDescription": "s",
            "content": "c",
            "blogId": "abc"
        }))
        .unwrap();
        assert_eq!(fields_of(&input), vec!["title"]);

        let (blog_id, fields) = PostInput {
            title: "t".into(),
            ..input
        }
        .into_parts();
        assert_eq!(blog_id, "abc");
        assert_eq!(fields.title, "t");
    }

    #[test]
    fn test_blog_post_input_does_not_need_blog_id() {
        let input: BlogPostInput = serde_json::from_value(json!({
            "title": "hello",
            "shortDescription": "short",
            "content": "body"
        }))
        .unwrap();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_wrong_types_are_reported_per_field() {
        let input: BlogInput = serde_json::from_value(json!({
            "name": 123,
            "description": "",
            "websiteUrl": "https://a.com"
        }))
        .unwrap();
        assert_eq!(fields_of(&input), vec!["description", "name"]);

        let input: CommentInput = serde_json::from_value(json!({"content": {"text": "hi"}})).unwrap();
        assert_eq!(fields_of(&input), vec!["content"]);
    }

    #[test]
    fn test_comment_length_bounds() {
        let short = CommentInput {
            content: "too short".into(),
        };
        let exact = CommentInput {
            content: "c".repeat(20),
        };
        let long = CommentInput {
            content: "c".repeat(301),
        };

        assert_eq!(fields_of(&short), vec!["content"]);
        assert!(exact.validate().is_ok());
        assert_eq!(fields_of(&long), vec!["content"]);
    }

    #[test]
    fn test_user_input_rules() {
        let valid = UserInput {
            login: "bob_1".into(),
            password: "secret".into(),
            email: "bob@example.com".into(),
        };
        assert!(valid.validate().is_ok());

        let invalid = UserInput {
            login: "b b".into(),
            password: "12345".into(),
            email: "not-an-email".into(),
        };
        assert_eq!(fields_of(&invalid), vec!["email", "login", "password"]);
    }

    #[test]
    fn test_login_input_requires_both_fields() {
        let input: LoginInput = serde_json::from_value(json!({
            "loginOrEmail": " ",
            "password": "   "
        }))
        .unwrap();
        assert_eq!(fields_of(&input), vec!["loginOrEmail", "password"]);
    }
}
