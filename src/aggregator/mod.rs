//! Aggregation layer.
//!
//! This module turns a three-level scope dataset into the drilldown
//! aggregate:
//! - Validates the Scope → Category → Activity shape
//! - Sums activity values into category totals
//! - Re-sums category totals into scope totals
//! - Assigns panel identifiers linking summary entries to detail panels
//!
//! The transform is pure and single-pass: it never mutates its input and
//! produces either a fully populated [`crate::Drilldown`] or an error.

pub mod aggregate;
pub(crate) mod validate;

pub use aggregate::{aggregate, composite_key, ID_SEPARATOR};
