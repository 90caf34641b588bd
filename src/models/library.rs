//! Library branch models and per-branch settings

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::policy::LendingPolicy;

/// A library branch offering part of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryBranch {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub logo: String,
    pub available_copy: u32,
}

/// Raw branch settings as stored by the configuration store.
///
/// Every value is a string, even the numeric policies; the keys are the
/// store's dotted setting names. Use [`LendingPolicy`] for typed access
/// instead of parsing these at call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySettings {
    #[serde(rename = "Library.isFree")]
    pub is_free: String,
    #[serde(rename = "Library.MaxDaysBorrow")]
    pub max_days_borrow: String,
    #[serde(rename = "Library.MaxItemsBorrow")]
    pub max_items_borrow: String,
    #[serde(rename = "Library.MaxItemsBorrowPerDay")]
    pub max_items_borrow_per_day: String,
    #[serde(rename = "Library.MembershipPeriod")]
    pub membership_period: String,
}

/// A branch together with its settings, as attached to a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOffer {
    #[serde(rename = "Library")]
    pub library: LibraryBranch,
    #[serde(rename = "Config")]
    pub config: LibrarySettings,
}

impl BranchOffer {
    /// Parse this branch's settings into a typed lending policy
    pub fn policy(&self) -> Result<LendingPolicy> {
        LendingPolicy::try_from(&self.config)
    }
}
