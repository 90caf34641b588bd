//! Lending policy parsing
//!
//! Library branches ship their policy as a bag of string-valued settings
//! under dotted keys (`Library.MaxDaysBorrow` etc.), even where the value is
//! semantically numeric. This module converts that bag into a typed
//! [`LendingPolicy`] exactly once, at the boundary, so call sites never
//! re-parse strings.

use crate::core::error::{CatalogError, Result};
use crate::models::library::LibrarySettings;

/// Typed lending policy of a single library branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LendingPolicy {
    /// Whether the branch lends without a paid membership
    pub is_free: bool,
    /// Maximum days a single loan may run
    pub max_days_borrow: u32,
    /// Maximum items a member may have out at once
    pub max_items_borrow: u32,
    /// Maximum items a member may check out per day
    pub max_items_borrow_per_day: u32,
    /// Membership validity period in days
    pub membership_period_days: u32,
}

impl TryFrom<&LibrarySettings> for LendingPolicy {
    type Error = CatalogError;

    fn try_from(settings: &LibrarySettings) -> Result<Self> {
        Ok(Self {
            is_free: parse_flag("Library.isFree", &settings.is_free)?,
            max_days_borrow: parse_count("Library.MaxDaysBorrow", &settings.max_days_borrow)?,
            max_items_borrow: parse_count("Library.MaxItemsBorrow", &settings.max_items_borrow)?,
            max_items_borrow_per_day: parse_count(
                "Library.MaxItemsBorrowPerDay",
                &settings.max_items_borrow_per_day,
            )?,
            membership_period_days: parse_count(
                "Library.MembershipPeriod",
                &settings.membership_period,
            )?,
        })
    }
}

/// Parse a boolean setting. The store writes flags as "1"/"0" but older
/// branches have been seen with "true"/"false".
fn parse_flag(key: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(CatalogError::InvalidPolicyValue {
            key,
            value: value.to_string(),
        }),
    }
}

/// Parse a non-negative numeric setting carried as a string.
fn parse_count(key: &'static str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| CatalogError::InvalidPolicyValue {
            key,
            value: value.to_string(),
        })
}
