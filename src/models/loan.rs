//! Loan (checkout) record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single checkout of a book by a user.
///
/// Produced by the loan service; this crate only fixes its shape. The
/// password fields protect the delivered copy and which of them applies is
/// gated by `security_version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub user_id: i64,
    /// Path of the generated output file delivered to the borrower
    pub out: String,
    pub pass: String,
    pub pass_zip: String,
    pub pass_pdf: String,
    pub md5_checksum: String,
    pub security_version: u32,
    /// Expiry of the loan
    pub end: DateTime<Utc>,
}

impl Loan {
    /// Whether the loan has expired at the given instant.
    ///
    /// The caller supplies the clock; model code never reads ambient time.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end <= now
    }
}
