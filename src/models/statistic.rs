//! Per-book engagement statistics

use serde::{Deserialize, Serialize};

/// Aggregated engagement counters for a book.
///
/// Computed by an external aggregator; no independent identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStatistic {
    pub total_reviews: u32,
    pub total_comments: u32,
    pub total_ratings: u32,
    /// Users currently reading
    pub total_reading: u32,
    /// Users who finished the book
    pub total_has_read: u32,
    pub total_has_borrow: u32,
    pub total_wishlists: u32,
    pub total_queues: u32,
    pub has_queue: u32, // 0 or 1
    /// Average rating pre-formatted by the aggregator, e.g. "4.5"
    pub rating: String,
}

impl BookStatistic {
    /// Whether anyone is queued for this book
    pub fn has_queue(&self) -> bool {
        self.has_queue != 0
    }

    /// Numeric value of the formatted rating string.
    ///
    /// Returns `None` when the aggregator sent an empty or unparsable
    /// rating, which callers treat as "not yet rated".
    pub fn rating_value(&self) -> Option<f64> {
        let trimmed = self.rating.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!(rating = %self.rating, "unparsable rating string");
                None
            }
        }
    }
}
