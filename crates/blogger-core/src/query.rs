//! List queries shared by every collection.
//!
//! Raw transport parameters arrive as strings ([`ListParams`]), are coerced
//! into a typed [`PageQuery`] (filter, sort, page window) and come back from
//! the repositories as a [`Paginated`] envelope.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::fields;

/// First page when `pageNumber` is missing or unusable.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Page size when `pageSize` is missing or unusable.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Raw list parameters as received in the query string.
///
/// Every value is kept as an untyped string; the accessors below coerce them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub search_name_term: Option<String>,
    pub search_login_term: Option<String>,
    pub search_email_term: Option<String>,
}

impl ListParams {
    pub fn page_number(&self) -> u64 {
        parse_positive(self.page_number.as_deref()).unwrap_or(DEFAULT_PAGE_NUMBER)
    }

    pub fn page_size(&self) -> u64 {
        parse_positive(self.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn sort(&self) -> Sort {
        let field = self
            .sort_by
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(fields::CREATED_AT);

        Sort {
            field: field.to_string(),
            direction: SortDirection::parse(self.sort_direction.as_deref()),
        }
    }

    /// Build the typed query for `filter` using this page window and sort.
    pub fn to_query(&self, filter: Filter) -> PageQuery {
        PageQuery {
            filter,
            sort: self.sort(),
            page_number: self.page_number(),
            page_size: self.page_size(),
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|n| *n >= 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `asc` (any case) sorts ascending; everything else, including nothing, descending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::new(fields::CREATED_AT, SortDirection::Desc)
    }
}

/// Right-hand side of an equality match.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Id(ObjectId),
    Text(String),
}

/// Store-agnostic document filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document.
    All,
    /// Field equals value.
    Eq {
        field: &'static str,
        value: FilterValue,
    },
    /// Case-insensitive literal substring match.
    Contains { field: &'static str, term: String },
    Or(Vec<Filter>),
    And(Vec<Filter>),
}

impl Filter {
    /// Search filter over `(field, term)` pairs.
    ///
    /// Absent or empty terms are ignored. One remaining term filters on its
    /// field alone, several are OR-ed, none matches everything.
    pub fn search<'a, I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Option<&'a str>)>,
    {
        let mut clauses: Vec<Filter> = terms
            .into_iter()
            .filter_map(|(field, term)| {
                term.filter(|t| !t.is_empty()).map(|t| Filter::Contains {
                    field,
                    term: t.to_string(),
                })
            })
            .collect();

        match clauses.len() {
            0 => Filter::All,
            1 => clauses.swap_remove(0),
            _ => Filter::Or(clauses),
        }
    }

    pub fn id_eq(field: &'static str, id: ObjectId) -> Self {
        Filter::Eq {
            field,
            value: FilterValue::Id(id),
        }
    }

    /// Conjunction of two filters, collapsing `All`.
    pub fn and(self, other: Filter) -> Self {
        match (self, other) {
            (Filter::All, f) | (f, Filter::All) => f,
            (a, b) => Filter::And(vec![a, b]),
        }
    }
}

/// A typed list request: what to match, in which order, which page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    pub filter: Filter,
    pub sort: Sort,
    pub page_number: u64,
    pub page_size: u64,
}

impl PageQuery {
    /// Number of matching documents before the requested page.
    pub fn skip(&self) -> u64 {
        self.page_number.saturating_sub(1).saturating_mul(self.page_size)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            filter: Filter::All,
            sort: Sort::default(),
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated envelope returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub pages_count: u64,
    pub page_size: u64,
    pub total_count: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_count: u64) -> Self {
        let pages_count = if page_size > 0 {
            total_count.div_ceil(page_size)
        } else {
            0
        };

        Self {
            items,
            page,
            pages_count,
            page_size,
            total_count,
        }
    }

    /// Transform every item, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            pages_count: self.pages_count,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut p = ListParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "pageNumber" => p.page_number = value,
                "pageSize" => p.page_size = value,
                "sortBy" => p.sort_by = value,
                "sortDirection" => p.sort_direction = value,
                "searchNameTerm" => p.search_name_term = value,
                _ => unreachable!("unknown key {key}"),
            }
        }
        p
    }

    #[test]
    fn test_defaults_when_params_missing() {
        let query = ListParams::default().to_query(Filter::All);

        assert_eq!(query.page_number, 1);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.sort, Sort::new("createdAt", SortDirection::Desc));
        assert_eq!(query.skip(), 0);
    }

    #[test]
    fn test_numeric_params_are_coerced() {
        let p = params(&[("pageNumber", "3"), ("pageSize", " 5 ")]);
        assert_eq!(p.page_number(), 3);
        assert_eq!(p.page_size(), 5);
        assert_eq!(p.to_query(Filter::All).skip(), 10);
    }

    #[test]
    fn test_unusable_numbers_fall_back_to_defaults() {
        for raw in ["0", "-2", "abc", "", "1.5"] {
            let p = params(&[("pageNumber", raw), ("pageSize", raw)]);
            assert_eq!(p.page_number(), DEFAULT_PAGE_NUMBER, "pageNumber={raw}");
            assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE, "pageSize={raw}");
        }
    }

    #[test]
    fn test_sort_direction_parsing() {
        assert_eq!(SortDirection::parse(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some("ASC")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("sideways")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(None), SortDirection::Desc);
    }

    #[test]
    fn test_custom_sort_field() {
        let p = params(&[("sortBy", "name"), ("sortDirection", "asc")]);
        assert_eq!(p.sort(), Sort::new("name", SortDirection::Asc));
    }

    #[test]
    fn test_search_without_terms_matches_all() {
        assert_eq!(Filter::search([("name", None)]), Filter::All);
        assert_eq!(Filter::search([("login", Some("")), ("email", None)]), Filter::All);
    }

    #[test]
    fn test_single_search_term_filters_its_field() {
        let filter = Filter::search([("login", None), ("email", Some("gmail"))]);
        assert_eq!(
            filter,
            Filter::Contains {
                field: "email",
                term: "gmail".to_string()
            }
        );
    }

    #[test]
    fn test_multiple_search_terms_are_or_combined() {
        let filter = Filter::search([("login", Some("bo")), ("email", Some("gmail"))]);
        assert_eq!(
            filter,
            Filter::Or(vec![
                Filter::Contains {
                    field: "login",
                    term: "bo".to_string()
                },
                Filter::Contains {
                    field: "email",
                    term: "gmail".to_string()
                },
            ])
        );
    }

    #[test]
    fn test_and_collapses_match_all() {
        let id = ObjectId::new();
        let scoped = Filter::id_eq("blogId", id);

        assert_eq!(Filter::All.and(scoped.clone()), scoped);
        assert_eq!(scoped.clone().and(Filter::All), scoped);

        let search = Filter::search([("name", Some("x"))]);
        assert_eq!(
            scoped.clone().and(search.clone()),
            Filter::And(vec![scoped, search])
        );
    }

    #[test]
    fn test_pages_count_is_ceiling() {
        let cases = [(0, 10, 0), (1, 10, 1), (10, 10, 1), (11, 10, 2), (7, 3, 3), (7, 1, 7)];
        for (total, size, expected) in cases {
            let page: Paginated<()> = Paginated::new(vec![], 1, size, total);
            assert_eq!(page.pages_count, expected, "total={total} size={size}");
        }
    }

    #[test]
    fn test_envelope_serializes_camel_case() {
        let page: Paginated<u8> = Paginated::new(vec![], 1, 10, 0);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "items": [],
                "page": 1,
                "pagesCount": 0,
                "pageSize": 10,
                "totalCount": 0
            })
        );
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Paginated::new(vec![1, 2], 2, 2, 5).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.page, 2);
        assert_eq!(page.pages_count, 3);
        assert_eq!(page.total_count, 5);
    }
}
