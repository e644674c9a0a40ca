//! Input shape validation.
//!
//! The dataset arrives as an already-deserialized [`serde_json::Value`];
//! these helpers check the three-level shape and report violations with a
//! path breadcrumb to the offending node.

use crate::error::{DrilldownError, Result};
use crate::model::Activity;
use serde_json::{Map, Value};

/// Require the document root to be a scope mapping.
pub(crate) fn as_scope_map(input: &Value) -> Result<&Map<String, Value>> {
    input
        .as_object()
        .ok_or_else(|| DrilldownError::malformed("$", "expected a scope mapping at the root"))
}

/// Require a scope's value to be a category mapping.
pub(crate) fn as_category_map<'a>(scope: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        DrilldownError::malformed(format!("$.{scope}"), "expected a category mapping")
    })
}

/// Parse a category's value into activity readings, preserving input order.
pub(crate) fn parse_activities(scope: &str, category: &str, value: &Value) -> Result<Vec<Activity>> {
    let entries = value.as_array().ok_or_else(|| {
        DrilldownError::malformed(
            format!("$.{scope}.{category}"),
            "expected a sequence of activity pairs",
        )
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_activity(scope, category, index, entry))
        .collect()
}

fn parse_activity(scope: &str, category: &str, index: usize, entry: &Value) -> Result<Activity> {
    let path = || format!("$.{scope}.{category}[{index}]");

    let pair = entry
        .as_array()
        .filter(|pair| pair.len() == 2)
        .ok_or_else(|| DrilldownError::malformed(path(), "expected a 2-element activity pair"))?;

    let name = pair[0]
        .as_str()
        .ok_or_else(|| DrilldownError::malformed(path(), "expected a string activity name"))?;

    // serde_json numbers are never NaN, but the guard keeps the contract
    // explicit for values routed through other Value producers.
    let value = pair[1]
        .as_f64()
        .filter(|value| !value.is_nan())
        .ok_or_else(|| DrilldownError::malformed(path(), "expected a numeric activity value"))?;

    Ok(Activity::new(name, value))
}
