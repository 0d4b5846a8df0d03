//! Translation of store-agnostic queries into MongoDB documents.

use bson::{Bson, Document};

use blogger_core::query::{Filter, FilterValue, Sort, SortDirection};

/// Entity ids are stored under `_id`.
fn stored_field(field: &str) -> &str {
    if field == "id" { "_id" } else { field }
}

fn single(field: &str, value: impl Into<Bson>) -> Document {
    let mut document = Document::new();
    document.insert(stored_field(field), value);
    document
}

fn clauses(filters: &[Filter]) -> Vec<Document> {
    filters.iter().map(filter_document).collect()
}

/// MongoDB query document for `filter`.
///
/// Substring search becomes an escaped, case-insensitive `$regex`.
pub fn filter_document(filter: &Filter) -> Document {
    match filter {
        Filter::All => Document::new(),
        Filter::Eq { field, value } => match value {
            FilterValue::Id(id) => single(field, *id),
            FilterValue::Text(text) => single(field, text.as_str()),
        },
        Filter::Contains { field, term } => {
            let mut pattern = Document::new();
            pattern.insert("$regex", regex::escape(term));
            pattern.insert("$options", "i");
            single(field, pattern)
        }
        Filter::Or(filters) => single("$or", clauses(filters)),
        Filter::And(filters) => single("$and", clauses(filters)),
    }
}

/// MongoDB sort document for `sort`.
pub fn sort_document(sort: &Sort) -> Document {
    let direction = match sort.direction {
        SortDirection::Asc => 1,
        SortDirection::Desc => -1,
    };
    single(&sort.field, direction)
}

#[cfg(test)]
mod tests {
    use bson::doc;
    use bson::oid::ObjectId;

    use super::*;

    #[test]
    fn test_match_all_is_empty_document() {
        assert_eq!(filter_document(&Filter::All), doc! {});
    }

    #[test]
    fn test_single_search_term() {
        let filter = Filter::search([("name", Some("rust"))]);
        assert_eq!(
            filter_document(&filter),
            doc! { "name": { "$regex": "rust", "$options": "i" } }
        );
    }

    #[test]
    fn test_search_term_is_escaped() {
        let filter = Filter::search([("name", Some("a.b*"))]);
        assert_eq!(
            filter_document(&filter),
            doc! { "name": { "$regex": "a\\.b\\*", "$options": "i" } }
        );
    }

    #[test]
    fn test_two_search_terms_become_or() {
        let filter = Filter::search([("login", Some("bo")), ("email", Some("gmail"))]);
        assert_eq!(
            filter_document(&filter),
            doc! {
                "$or": [
                    { "login": { "$regex": "bo", "$options": "i" } },
                    { "email": { "$regex": "gmail", "$options": "i" } },
                ]
            }
        );
    }

    #[test]
    fn test_scoped_filter() {
        let id = ObjectId::new();
        let filter =
            Filter::id_eq("blogId", id).and(Filter::search([("name", Some("x"))]));
        assert_eq!(
            filter_document(&filter),
            doc! {
                "$and": [
                    { "blogId": id },
                    { "name": { "$regex": "x", "$options": "i" } },
                ]
            }
        );
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!(
            sort_document(&Sort::new("createdAt", SortDirection::Desc)),
            doc! { "createdAt": -1 }
        );
        assert_eq!(
            sort_document(&Sort::new("name", SortDirection::Asc)),
            doc! { "name": 1 }
        );
    }

    #[test]
    fn test_id_maps_to_stored_key() {
        assert_eq!(
            sort_document(&Sort::new("id", SortDirection::Asc)),
            doc! { "_id": 1 }
        );

        let id = ObjectId::new();
        assert_eq!(filter_document(&Filter::id_eq("id", id)), doc! { "_id": id });
    }
}
