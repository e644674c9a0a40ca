//! Output data model for the drilldown aggregate.
//!
//! The rendering collaborator reads the top-level series from
//! [`Drilldown::summary`] and follows each `detail_ref` through
//! [`Drilldown::resolve`] to the next panel. Scope panels hold category
//! rows with their own `detail_ref`; category panels are terminal and hold
//! the raw activity readings in input order.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A leaf-level named measurement with a numeric emissions value.
///
/// Serializes as the 2-element pair `["name", value]`, the wire shape the
/// source documents use for activity readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub value: f64,
}

impl Activity {
    /// Create a new activity reading.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Serialize for Activity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.name)?;
        pair.serialize_element(&self.value)?;
        pair.end()
    }
}

impl<'de> Deserialize<'de> for Activity {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let (name, value) = <(String, f64)>::deserialize(deserializer)?;
        if value.is_nan() {
            return Err(D::Error::custom("activity value must not be NaN"));
        }
        Ok(Self { name, value })
    }
}

/// Top-level summary entry, one per scope.
///
/// `detail_ref` equals the scope name and resolves to that scope's panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    pub name: String,
    pub total: f64,
    pub detail_ref: String,
}

/// Category row inside a scope panel.
///
/// `detail_ref` is the composite `"{scope}-{category}"` key and resolves to
/// the category's terminal panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub name: String,
    pub total: f64,
    pub detail_ref: String,
}

/// A detail panel reachable through a `detail_ref`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DetailPanel {
    /// Scope panel: ordered category rows, each linking one level deeper.
    Categories(Vec<CategorySummary>),
    /// Category panel: raw activity readings in input order. Terminal.
    Activities(Vec<Activity>),
}

impl DetailPanel {
    /// Number of rows in the panel.
    pub fn len(&self) -> usize {
        match self {
            Self::Categories(rows) => rows.len(),
            Self::Activities(rows) => rows.len(),
        }
    }

    /// Check if the panel has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the panel is terminal (no further drilldown).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Activities(_))
    }

    /// Get the category rows, if this is a scope panel.
    pub fn as_categories(&self) -> Option<&[CategorySummary]> {
        match self {
            Self::Categories(rows) => Some(rows),
            Self::Activities(_) => None,
        }
    }

    /// Get the activity readings, if this is a terminal panel.
    pub fn as_activities(&self) -> Option<&[Activity]> {
        match self {
            Self::Activities(rows) => Some(rows),
            Self::Categories(_) => None,
        }
    }
}

/// Lookup mapping from panel identifier to detail panel.
pub type DetailIndex = HashMap<String, DetailPanel>;

/// The full aggregate: top-level summary plus the linked detail index.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Drilldown {
    /// One entry per scope, in input order.
    pub summary: Vec<SummaryEntry>,
    /// Panels keyed by scope name or composite scope-category key.
    pub details: DetailIndex,
}

impl Drilldown {
    /// Resolve a `detail_ref` to its panel.
    pub fn resolve(&self, detail_ref: &str) -> Option<&DetailPanel> {
        self.details.get(detail_ref)
    }

    /// Sum of all scope totals.
    pub fn grand_total(&self) -> f64 {
        self.summary.iter().map(|entry| entry.total).sum()
    }

    /// Number of top-level summary entries.
    pub fn len(&self) -> usize {
        self.summary.len()
    }

    /// Check if the aggregate holds no scopes.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}
