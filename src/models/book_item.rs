//! Composite per-book view

use serde::{Deserialize, Serialize};

use crate::core::error::{CatalogError, Result};
use crate::models::book::{Book, BookCategory, BookPublisher};
use crate::models::library::BranchOffer;
use crate::models::loan::Loan;
use crate::models::statistic::BookStatistic;

/// Everything the reading UI needs for one book: the title itself, the
/// user's loan record, aggregated statistics, classification, publisher,
/// and the branches offering it. Which branch the loan belongs to is not
/// part of this view; the access check carries the branch foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookItem {
    #[serde(rename = "Book")]
    pub book: Book,
    #[serde(rename = "Item")]
    pub item: Loan,
    #[serde(rename = "Statistic")]
    pub statistic: BookStatistic,
    #[serde(rename = "Category")]
    pub category: BookCategory,
    #[serde(rename = "Publisher")]
    pub publisher: BookPublisher,
    /// Branches offering this book; may be empty
    #[serde(rename = "Library")]
    pub library: Vec<BranchOffer>,
}

impl BookItem {
    /// Check cross-field consistency the individual shapes cannot express:
    /// the embedded category and publisher must be the ones the book
    /// references, and every branch's settings must parse into a policy.
    pub fn validate(&self) -> Result<()> {
        if self.book.publisher_id != self.publisher.id {
            return Err(CatalogError::ValidationError(format!(
                "book {} references publisher {} but carries publisher {}",
                self.book.id, self.book.publisher_id, self.publisher.id
            )));
        }
        if self.book.category_id != self.category.id {
            return Err(CatalogError::ValidationError(format!(
                "book {} references category {} but carries category {}",
                self.book.id, self.book.category_id, self.category.id
            )));
        }
        for offer in &self.library {
            offer.policy()?;
        }
        Ok(())
    }
}
