#[cfg(test)]
mod tests {
    use bson::{Bson, Document};

    use crate::database::StoredDocument;
    use crate::database::document::{BlogDocument, CommentDocument, PostDocument, UserDocument};
    use blogger_core::domain::{Blog, BlogFields, Comment, Post, PostFields, User};

    fn blog() -> Blog {
        Blog::new(BlogFields {
            name: "Rust".to_owned(),
            description: "Systems".to_owned(),
            website_url: "https://rust-lang.org".to_owned(),
        })
    }

    fn stored<D: StoredDocument>(entity: D::Entity) -> Document {
        bson::to_document(&D::from_entity(entity)).unwrap()
    }

    #[test]
    fn test_blog_document_layout() {
        let blog = blog();
        let document = stored::<BlogDocument>(blog.clone());

        assert_eq!(document.get_object_id("_id").unwrap(), blog.id);
        assert!(!document.contains_key("id"));
        assert_eq!(document.get_str("websiteUrl").unwrap(), "https://rust-lang.org");
        assert!(!document.get_bool("isMembership").unwrap());
        assert!(matches!(document.get("createdAt"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn test_blog_round_trip_preserves_entity() {
        let blog = blog();
        let document = stored::<BlogDocument>(blog.clone());

        let restored: BlogDocument = bson::from_document(document).unwrap();

        assert_eq!(restored.into_entity(), blog);
    }

    #[test]
    fn test_post_document_references_blog() {
        let blog = blog();
        let post = Post::new(
            PostFields {
                title: "Ownership".to_owned(),
                short_description: "Borrowing".to_owned(),
                content: "Lifetimes".to_owned(),
            },
            &blog,
        );
        let document = stored::<PostDocument>(post.clone());

        assert_eq!(document.get_object_id("blogId").unwrap(), blog.id);
        assert_eq!(document.get_str("blogName").unwrap(), "Rust");
        assert_eq!(document.get_str("shortDescription").unwrap(), "Borrowing");

        let restored: PostDocument = bson::from_document(document).unwrap();
        assert_eq!(restored.into_entity(), post);
    }

    #[test]
    fn test_comment_document_nests_commentator() {
        let user = User::new("bob".to_owned(), "bob@mail.com".to_owned(), "hash".to_owned());
        let comment = Comment::new(
            bson::oid::ObjectId::new(),
            "a comment long enough to be valid".to_owned(),
            &user,
        );
        let document = stored::<CommentDocument>(comment.clone());

        let info = document.get_document("commentatorInfo").unwrap();
        assert_eq!(info.get_object_id("userId").unwrap(), user.id);
        assert_eq!(info.get_str("userLogin").unwrap(), "bob");

        let restored: CommentDocument = bson::from_document(document).unwrap();
        assert_eq!(restored.into_entity(), comment);
    }

    #[test]
    fn test_user_document_keeps_hash_and_indexes() {
        let user = User::new("bob".to_owned(), "bob@mail.com".to_owned(), "$argon2id$x".to_owned());
        let document = stored::<UserDocument>(user);

        assert_eq!(document.get_str("passwordHash").unwrap(), "$argon2id$x");
        assert_eq!(UserDocument::indexes().len(), 2);
        assert_eq!(PostDocument::indexes().len(), 1);
        assert!(BlogDocument::indexes().is_empty());
    }
}
