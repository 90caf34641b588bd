//! Book, category, and publisher models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::CatalogError;

/// Resolution state of a book's cover image.
///
/// The historical wire layout carries two independent flags (`coverLoaded`,
/// `coverNonExists`) next to the optional URL. In memory the three legal
/// states are a single enum, so the both-flags-set combination cannot be
/// represented; deserializing it fails instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverStatus {
    /// No lookup has completed yet; a URL may already be known
    Unresolved {
        url: Option<String>,
        origin: Option<String>,
    },
    /// The cover was fetched successfully
    Loaded { url: String, origin: Option<String> },
    /// The lookup completed and confirmed there is no cover
    Missing,
}

impl CoverStatus {
    /// URL of the cover, if one is known
    pub fn url(&self) -> Option<&str> {
        match self {
            CoverStatus::Unresolved { url, .. } => url.as_deref(),
            CoverStatus::Loaded { url, .. } => Some(url),
            CoverStatus::Missing => None,
        }
    }

    /// Whether the lookup has reached a terminal state (loaded or missing)
    pub fn is_resolved(&self) -> bool {
        !matches!(self, CoverStatus::Unresolved { .. })
    }
}

/// A catalog title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBook", into = "RawBook")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub description: String,
    /// Display string, possibly several names joined by the upstream service
    pub authors: String,
    pub publisher_name: String,
    pub publisher_id: i64,
    pub category_id: i64,
    pub cover: CoverStatus,
    pub available_copy: u32,
    pub price: f64,
    /// Human-readable file size, filled lazily by the delivery service
    pub size: Option<String>,
    pub extension: Option<String>,
    /// Whether the requesting user already holds this book, when known
    pub has_book: Option<bool>,
    pub published_date: String,
    pub formatted_date: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Book record in the historical wire layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawBook {
    id: i64,
    title: String,
    isbn: String,
    description: String,
    authors: String,
    publisher_name: String,
    publisher_id: i64,
    category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cover_origin: Option<String>,
    #[serde(
        default,
        rename = "coverLoaded",
        skip_serializing_if = "Option::is_none"
    )]
    cover_loaded: Option<bool>,
    #[serde(
        default,
        rename = "coverNonExists",
        skip_serializing_if = "Option::is_none"
    )]
    cover_non_exists: Option<bool>,
    available_copy: u32,
    price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    has_book: Option<bool>,
    published_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    formatted_date: Option<String>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl TryFrom<RawBook> for Book {
    type Error = CatalogError;

    fn try_from(raw: RawBook) -> Result<Self, Self::Error> {
        let loaded = raw.cover_loaded.unwrap_or(false);
        let non_exists = raw.cover_non_exists.unwrap_or(false);
        let cover = match (loaded, non_exists) {
            (true, true) => {
                return Err(CatalogError::InvalidCoverState(
                    "coverLoaded and coverNonExists are both set".into(),
                ))
            }
            (false, true) => CoverStatus::Missing,
            (true, false) => CoverStatus::Loaded {
                url: raw.cover.ok_or_else(|| {
                    CatalogError::InvalidCoverState(
                        "coverLoaded is set but no cover URL is present".into(),
                    )
                })?,
                origin: raw.cover_origin,
            },
            (false, false) => CoverStatus::Unresolved {
                url: raw.cover,
                origin: raw.cover_origin,
            },
        };

        Ok(Self {
            id: raw.id,
            title: raw.title,
            isbn: raw.isbn,
            description: raw.description,
            authors: raw.authors,
            publisher_name: raw.publisher_name,
            publisher_id: raw.publisher_id,
            category_id: raw.category_id,
            cover,
            available_copy: raw.available_copy,
            price: raw.price,
            size: raw.size,
            extension: raw.extension,
            has_book: raw.has_book,
            published_date: raw.published_date,
            formatted_date: raw.formatted_date,
            created: raw.created,
            modified: raw.modified,
        })
    }
}

impl From<Book> for RawBook {
    fn from(book: Book) -> Self {
        let (cover, cover_origin, cover_loaded, cover_non_exists) = match book.cover {
            CoverStatus::Unresolved { url, origin } => (url, origin, None, None),
            CoverStatus::Loaded { url, origin } => (Some(url), origin, Some(true), None),
            CoverStatus::Missing => (None, None, None, Some(true)),
        };

        Self {
            id: book.id,
            title: book.title,
            isbn: book.isbn,
            description: book.description,
            authors: book.authors,
            publisher_name: book.publisher_name,
            publisher_id: book.publisher_id,
            category_id: book.category_id,
            cover,
            cover_origin,
            cover_loaded,
            cover_non_exists,
            available_copy: book.available_copy,
            price: book.price,
            size: book.size,
            extension: book.extension,
            has_book: book.has_book,
            published_date: book.published_date,
            formatted_date: book.formatted_date,
            created: book.created,
            modified: book.modified,
        }
    }
}

/// A classification bucket referenced by `Book.category_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCategory {
    pub id: i64,
    pub type_id: i64,
    pub name: String,
}

/// A publishing house referenced by `Book.publisher_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPublisher {
    pub id: i64,
    pub name: String,
    pub website: String,
    pub logo: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn book_json(cover_fields: &str) -> String {
        format!(
            r#"{{
                "id": 42,
                "title": "The Silent Stacks",
                "isbn": "978-3-16-148410-0",
                "description": "A mystery set in a closing library.",
                "authors": "R. Ellery",
                "publisher_name": "Midnight Press",
                "publisher_id": 7,
                "category_id": 3,
                {cover_fields}
                "available_copy": 2,
                "price": 9.99,
                "published_date": "2019-05-02",
                "created": "2020-01-15T10:00:00Z",
                "modified": "2021-06-01T08:30:00Z"
            }}"#
        )
    }

    #[test]
    fn test_deserialize_loaded_cover() {
        let json = book_json(r#""cover": "https://cdn/covers/42.jpg", "coverLoaded": true,"#);
        let book: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(
            book.cover,
            CoverStatus::Loaded {
                url: "https://cdn/covers/42.jpg".into(),
                origin: None
            }
        );
        assert!(book.cover.is_resolved());
        assert_eq!(book.available_copy, 2);
    }

    #[test]
    fn test_deserialize_missing_cover() {
        let json = book_json(r#""coverNonExists": true,"#);
        let book: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book.cover, CoverStatus::Missing);
        assert_eq!(book.cover.url(), None);
    }

    #[test]
    fn test_deserialize_unresolved_cover_with_url() {
        let json = book_json(r#""cover": "https://cdn/covers/42.jpg","#);
        let book: Book = serde_json::from_str(&json).unwrap();
        assert!(!book.cover.is_resolved());
        assert_eq!(book.cover.url(), Some("https://cdn/covers/42.jpg"));
    }

    #[test]
    fn test_conflicting_cover_flags_rejected() {
        let json = book_json(
            r#""cover": "https://cdn/covers/42.jpg", "coverLoaded": true, "coverNonExists": true,"#,
        );
        let err = serde_json::from_str::<Book>(&json).unwrap_err();
        assert!(err.to_string().contains("coverLoaded"));
    }

    #[test]
    fn test_loaded_without_url_rejected() {
        let json = book_json(r#""coverLoaded": true,"#);
        assert!(serde_json::from_str::<Book>(&json).is_err());
    }

    #[test]
    fn test_negative_available_copy_rejected() {
        let json = book_json(r#""coverNonExists": true,"#)
            .replace("\"available_copy\": 2", "\"available_copy\": -1");
        assert!(serde_json::from_str::<Book>(&json).is_err());
    }

    #[test]
    fn test_serialize_missing_cover_emits_flag_only() {
        let json = book_json(r#""coverNonExists": true,"#);
        let book: Book = serde_json::from_str(&json).unwrap();
        let value: serde_json::Value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["coverNonExists"], serde_json::json!(true));
        assert!(value.get("cover").is_none());
        assert!(value.get("coverLoaded").is_none());
    }

    fn cover_status_strategy() -> impl Strategy<Value = CoverStatus> {
        let url = "[a-z]{1,12}";
        prop_oneof![
            (proptest::option::of(url), proptest::option::of(url))
                .prop_map(|(url, origin)| CoverStatus::Unresolved { url, origin }),
            (url, proptest::option::of(url))
                .prop_map(|(url, origin)| CoverStatus::Loaded { url, origin }),
            Just(CoverStatus::Missing),
        ]
    }

    proptest! {
        #[test]
        fn prop_cover_status_round_trips(cover in cover_status_strategy()) {
            let json = book_json("");
            let mut book: Book = serde_json::from_str(&json).unwrap();
            book.cover = cover.clone();

            let encoded = serde_json::to_string(&book).unwrap();
            let decoded: Book = serde_json::from_str(&encoded).unwrap();
            prop_assert_eq!(decoded.cover, cover);
        }
    }
}
