//! Analytics for a project-management back office.
//!
//! [`analytics::compute`] turns any in-memory slice of [`types::ProjectRecord`]
//! into an [`types::AnalyticsSummary`]: money totals, a status distribution,
//! payment buckets and an executor ranking. The other modules load records
//! and render the summary; the aggregation depends on none of them.

pub mod analytics;
pub mod cli;
pub mod demo;
pub mod error;
pub mod loader;
pub mod output;
pub mod report;
pub mod types;
pub mod util;

pub use analytics::compute;
pub use error::{AnalyticsError, Result};
pub use types::{AnalyticsSummary, ExecutorStat, PaymentStatus, ProjectRecord};
