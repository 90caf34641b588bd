//! Lending Catalog Library
//!
//! This library defines the typed boundary of an e-book lending catalog:
//! books, loan records, per-book statistics, categories, publishers,
//! library branches with their lending policies, and the composite
//! per-book view exchanged with the service and UI layers.
//!
//! All shapes serialize to the catalog's historical JSON layout, including
//! its irregular field names (`coverLoaded`, `passZip`, dotted settings
//! keys, PascalCase aggregate keys).

pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{CatalogError, LendingPolicy, Result};
pub use models::{
    Book, BookAccess, BookCategory, BookItem, BookPublisher, BookStatistic, BranchOffer,
    CoverStatus, LibraryBranch, LibrarySettings, Loan,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
