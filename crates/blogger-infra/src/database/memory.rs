//! In-memory repositories - used when no database is configured and in tests.
//!
//! Filters and sorting are evaluated against the entity's JSON form, so field
//! names are the same camelCase names the document store uses.
//! Note: Data is lost on process restart.

use std::cmp::Ordering;

use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::DateTime;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use blogger_core::domain::{Blog, Comment, Entity, Post, User};
use blogger_core::error::RepoError;
use blogger_core::ports::{
    BaseRepository, BlogRepository, CommentRepository, PostRepository, UserRepository,
};
use blogger_core::query::{Filter, FilterValue, Sort, SortDirection};

/// Generic in-memory collection kept in insertion order behind an async RwLock.
pub struct InMemoryBaseRepository<T> {
    store: RwLock<Vec<T>>,
}

impl<T> InMemoryBaseRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryBaseRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory blog repository.
pub type InMemoryBlogRepository = InMemoryBaseRepository<Blog>;

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryBaseRepository<Post>;

/// In-memory comment repository.
pub type InMemoryCommentRepository = InMemoryBaseRepository<Comment>;

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryBaseRepository<User>;

fn to_json<T: Serialize>(entity: &T) -> Result<Value, RepoError> {
    serde_json::to_value(entity).map_err(|e| RepoError::Serialization(e.to_string()))
}

/// Resolve a dotted field path such as `commentatorInfo.userLogin`.
fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(document, |value, key| value.as_object()?.get(key))
}

fn filter_value(value: &FilterValue) -> Result<Value, RepoError> {
    match value {
        FilterValue::Id(id) => to_json(id),
        FilterValue::Text(text) => Ok(Value::String(text.clone())),
    }
}

fn matches(filter: &Filter, document: &Value) -> Result<bool, RepoError> {
    Ok(match filter {
        Filter::All => true,
        Filter::Eq { field, value } => lookup(document, field) == Some(&filter_value(value)?),
        Filter::Contains { field, term } => lookup(document, field)
            .and_then(Value::as_str)
            .is_some_and(|text| text.to_lowercase().contains(&term.to_lowercase())),
        Filter::Or(clauses) => {
            for clause in clauses {
                if matches(clause, document)? {
                    return Ok(true);
                }
            }
            false
        }
        Filter::And(clauses) => {
            for clause in clauses {
                if !matches(clause, document)? {
                    return Ok(false);
                }
            }
            true
        }
    })
}

/// Type rank roughly following the document store's cross-type ordering.
fn rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Number(_)) => 1,
        Some(Value::String(_)) => 2,
        Some(Value::Object(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Bool(_)) => 5,
    }
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => {
            // Timestamps serialize with a variable number of fraction digits
            match (DateTime::parse_from_rfc3339(x), DateTime::parse_from_rfc3339(y)) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => x.cmp(y),
            }
        }
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x @ Value::Object(_)), Some(y @ Value::Object(_)))
        | (Some(x @ Value::Array(_)), Some(y @ Value::Array(_))) => {
            x.to_string().cmp(&y.to_string())
        }
        _ => rank(a).cmp(&rank(b)),
    }
}

#[async_trait]
impl<T> BaseRepository<T> for InMemoryBaseRepository<T>
where
    T: Entity + Serialize,
{
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|e| e.id() == id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        store.push(entity.clone());
        Ok(entity)
    }

    async fn replace(&self, entity: T) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        match store.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => {
                *slot = entity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|e| e.id() != id);
        Ok(store.len() != before)
    }

    async fn find_many(
        &self,
        filter: &Filter,
        sort: &Sort,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<T>, RepoError> {
        let store = self.store.read().await;

        let mut matched = Vec::new();
        for entity in store.iter() {
            let document = to_json(entity)?;
            if matches(filter, &document)? {
                matched.push((document, entity));
            }
        }

        // Stable sort: ties keep insertion order
        matched.sort_by(|(a, _), (b, _)| {
            let ordering = compare(lookup(a, &sort.field), lookup(b, &sort.field));
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(matched
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|(_, entity)| entity.clone())
            .collect())
    }

    async fn count(&self, filter: &Filter) -> Result<u64, RepoError> {
        let store = self.store.read().await;

        let mut total = 0;
        for entity in store.iter() {
            if matches(filter, &to_json(entity)?)? {
                total += 1;
            }
        }
        Ok(total)
    }

    async fn delete_all(&self) -> Result<(), RepoError> {
        self.store.write().await.clear();
        Ok(())
    }
}

impl BlogRepository for InMemoryBlogRepository {}

impl PostRepository for InMemoryPostRepository {}

impl CommentRepository for InMemoryCommentRepository {}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_login_or_email(&self, value: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .find(|u| u.login == value || u.email == value)
            .cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.login == login).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use blogger_core::domain::{BlogFields, PostFields, fields};
    use blogger_core::query::{ListParams, PageQuery};

    fn blog(name: &str) -> Blog {
        Blog::new(BlogFields {
            name: name.to_string(),
            description: format!("{name} description"),
            website_url: format!("https://{name}.example.com"),
        })
    }

    async fn seeded(names: &[&str]) -> InMemoryBlogRepository {
        let repo = InMemoryBlogRepository::new();
        let start = Utc::now();
        for (i, name) in names.iter().enumerate() {
            let mut b = blog(name);
            // Distinct, increasing creation times
            b.created_at = start + Duration::milliseconds(i as i64);
            repo.insert(b).await.unwrap();
        }
        repo
    }

    fn names(blogs: &[Blog]) -> Vec<&str> {
        blogs.iter().map(|b| b.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_insert_find_replace_delete() {
        let repo = InMemoryBlogRepository::new();
        let mut stored = repo.insert(blog("alpha")).await.unwrap();

        assert_eq!(repo.find_by_id(stored.id).await.unwrap(), Some(stored.clone()));

        stored.name = "beta".to_string();
        assert!(repo.replace(stored.clone()).await.unwrap());
        assert_eq!(repo.find_by_id(stored.id).await.unwrap().unwrap().name, "beta");

        assert!(repo.delete(stored.id).await.unwrap());
        assert!(!repo.delete(stored.id).await.unwrap());
        assert_eq!(repo.find_by_id(stored.id).await.unwrap(), None);
        assert!(!repo.replace(stored).await.unwrap());
    }

    #[tokio::test]
    async fn test_default_sort_is_newest_first() {
        let repo = seeded(&["first", "second", "third"]).await;

        let page = repo.find_page(&PageQuery::default()).await.unwrap();

        assert_eq!(names(&page.items), vec!["third", "second", "first"]);
        assert_eq!(page.total_count, 3);
        assert_eq!(page.pages_count, 1);
    }

    #[tokio::test]
    async fn test_sort_by_field_ascending() {
        let repo = seeded(&["charlie", "alpha", "bravo"]).await;
        let query = PageQuery {
            sort: Sort::new("name", SortDirection::Asc),
            ..PageQuery::default()
        };

        let page = repo.find_page(&query).await.unwrap();

        assert_eq!(names(&page.items), vec!["alpha", "bravo", "charlie"]);
    }

    #[tokio::test]
    async fn test_sort_by_id_follows_creation_order() {
        let repo = seeded(&["first", "second", "third"]).await;
        let query = PageQuery {
            sort: Sort::new("id", SortDirection::Asc),
            ..PageQuery::default()
        };

        let page = repo.find_page(&query).await.unwrap();

        assert_eq!(names(&page.items), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_page_window_and_counts() {
        let repo = seeded(&["a", "b", "c", "d", "e", "f", "g"]).await;

        for (page_number, expected) in [(1, 3), (2, 3), (3, 1), (4, 0)] {
            let query = PageQuery {
                page_number,
                page_size: 3,
                sort: Sort::new("name", SortDirection::Asc),
                ..PageQuery::default()
            };
            let page = repo.find_page(&query).await.unwrap();

            assert_eq!(page.items.len(), expected, "page {page_number}");
            assert_eq!(page.total_count, 7);
            assert_eq!(page.pages_count, 3);
        }

        let query = PageQuery {
            page_number: 2,
            page_size: 3,
            sort: Sort::new("name", SortDirection::Asc),
            ..PageQuery::default()
        };
        assert_eq!(
            names(&repo.find_page(&query).await.unwrap().items),
            vec!["d", "e", "f"]
        );
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_counts_filtered_set() {
        let repo = seeded(&["RustLang", "rusty", "golang", "Trust"]).await;
        let params = ListParams {
            search_name_term: Some("RUST".to_string()),
            page_size: Some("2".to_string()),
            ..ListParams::default()
        };
        let filter = Filter::search([(fields::NAME, params.search_name_term.as_deref())]);

        let page = repo.find_page(&params.to_query(filter)).await.unwrap();

        assert_eq!(page.total_count, 3);
        assert_eq!(page.pages_count, 2);
        assert_eq!(names(&page.items), vec!["Trust", "rusty"]);
    }

    #[tokio::test]
    async fn test_search_term_is_literal() {
        let repo = seeded(&["a.c", "abc"]).await;
        let filter = Filter::search([(fields::NAME, Some("a.c"))]);

        assert_eq!(repo.count(&filter).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_filter_by_reference_id() {
        let posts = InMemoryPostRepository::new();
        let first = blog("first");
        let second = blog("second");
        for (i, parent) in [&first, &second, &first].into_iter().enumerate() {
            let fields = PostFields {
                title: format!("post {i}"),
                short_description: "short".to_string(),
                content: "content".to_string(),
            };
            posts.insert(Post::new(fields, parent)).await.unwrap();
        }

        let filter = Filter::id_eq(fields::BLOG_ID, first.id);
        let found = posts
            .find_many(&filter, &Sort::new("title", SortDirection::Asc), 0, 10)
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.blog_id == first.id && p.blog_name == "first"));
        assert_eq!(posts.count(&Filter::All).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_or_filter_over_users() {
        let users = InMemoryUserRepository::new();
        for (login, email) in [
            ("bob", "bob@mail.com"),
            ("alice", "alice@gmail.com"),
            ("carol", "carol@mail.com"),
        ] {
            let user = User::new(login.to_string(), email.to_string(), "hash".to_string());
            users.insert(user).await.unwrap();
        }

        let filter = Filter::search([(fields::LOGIN, Some("CAR")), (fields::EMAIL, Some("gmail"))]);

        assert_eq!(users.count(&filter).await.unwrap(), 2);
        assert_eq!(
            users.find_by_login_or_email("alice@gmail.com").await.unwrap().map(|u| u.login),
            Some("alice".to_string())
        );
        assert_eq!(
            users.find_by_login_or_email("bob").await.unwrap().map(|u| u.email),
            Some("bob@mail.com".to_string())
        );
        assert!(users.find_by_login("ALICE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_all() {
        let repo = seeded(&["a", "b"]).await;
        repo.delete_all().await.unwrap();
        assert_eq!(repo.count(&Filter::All).await.unwrap(), 0);
    }
}
