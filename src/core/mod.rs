//! Core catalog logic
//!
//! This module provides the non-model layer of the crate:
//! - Error handling and type system
//! - One-time parsing of branch lending policies

pub mod error;
pub mod policy;

pub use error::{CatalogError, Result};
pub use policy::LendingPolicy;
