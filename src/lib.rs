pub mod aggregator;
pub mod error;
pub mod model;

pub use aggregator::{aggregate, composite_key};
pub use error::{DrilldownError, Result};
pub use model::{
    Activity, CategorySummary, DetailIndex, DetailPanel, Drilldown, SummaryEntry,
};
