//! Catalog boundary models
//!
//! Data structures exchanged with the service, UI, and persistence layers.
//! Serialization follows the catalog's historical JSON layout.

pub mod access;
pub mod book;
pub mod book_item;
pub mod library;
pub mod loan;
pub mod statistic;

pub use access::{AccessCredentials, BookAccess};
pub use book::{Book, BookCategory, BookPublisher, CoverStatus};
pub use book_item::BookItem;
pub use library::{BranchOffer, LibraryBranch, LibrarySettings};
pub use loan::Loan;
pub use statistic::BookStatistic;
