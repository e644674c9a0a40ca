//! The core aggregation pass.

use crate::error::{DrilldownError, Result};
use crate::model::{CategorySummary, DetailIndex, DetailPanel, Drilldown, SummaryEntry};
use serde_json::Value;
use tracing::{debug, trace};

use super::validate::{as_category_map, as_scope_map, parse_activities};

/// Separator between the scope and category parts of a composite panel id.
///
/// Scope names are assumed not to alias composite keys through this
/// separator; when they do, [`aggregate`] rejects the dataset instead of
/// overwriting a panel.
pub const ID_SEPARATOR: char = '-';

/// Build the composite panel id for a category within a scope.
pub fn composite_key(scope: &str, category: &str) -> String {
    format!("{scope}{ID_SEPARATOR}{category}")
}

/// Aggregate a Scope → Category → Activity dataset into a drilldown pair.
///
/// Walks the dataset once, in document order. For each category the
/// activity values are summed into a category total and the raw readings
/// become a terminal panel; each scope total is the sum of its category
/// totals, so the two aggregation levels agree exactly even though
/// floating-point addition is order-sensitive.
///
/// Returns a fully populated [`Drilldown`] or fails without producing any
/// output. The input is never mutated.
///
/// # Errors
///
/// [`DrilldownError::MalformedInput`] when the dataset deviates from the
/// three-level shape or an activity value is non-numeric;
/// [`DrilldownError::IdentifierCollision`] when two panels compute the same
/// id.
pub fn aggregate(input: &Value) -> Result<Drilldown> {
    let scopes = as_scope_map(input)?;

    let mut summary = Vec::with_capacity(scopes.len());
    let mut details = DetailIndex::new();

    for (scope, categories) in scopes {
        let categories = as_category_map(scope, categories)?;
        trace!(scope = %scope, categories = categories.len(), "Aggregating scope");

        let mut rows = Vec::with_capacity(categories.len());
        for (category, activities) in categories {
            let activities = parse_activities(scope, category, activities)?;
            let category_total: f64 = activities.iter().map(|activity| activity.value).sum();

            let id = composite_key(scope, category);
            insert_panel(&mut details, id.clone(), DetailPanel::Activities(activities))?;

            rows.push(CategorySummary {
                name: category.clone(),
                total: category_total,
                detail_ref: id,
            });
        }

        // Scope totals reuse the category totals rather than re-summing raw
        // activities, keeping both aggregation levels consistent.
        let scope_total: f64 = rows.iter().map(|row| row.total).sum();

        summary.push(SummaryEntry {
            name: scope.clone(),
            total: scope_total,
            detail_ref: scope.clone(),
        });
        insert_panel(&mut details, scope.clone(), DetailPanel::Categories(rows))?;
    }

    debug!(
        scopes = summary.len(),
        panels = details.len(),
        "Built drilldown aggregate"
    );
    Ok(Drilldown { summary, details })
}

fn insert_panel(details: &mut DetailIndex, id: String, panel: DetailPanel) -> Result<()> {
    if details.contains_key(&id) {
        return Err(DrilldownError::collision(id));
    }
    details.insert(id, panel);
    Ok(())
}
