// Display rows built from an `AnalyticsSummary`. Ratios are derived here at
// render time and never stored in the summary.
use crate::types::{
    AnalyticsSummary, ExecutorRankingRow, PaymentBucket, PaymentRow, StatusRow,
};
use crate::util::format_number;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON envelope written next to the CSV exports.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub summary: &'a AnalyticsSummary,
}

impl<'a> AnalyticsReport<'a> {
    pub fn new(source: impl Into<String>, summary: &'a AnalyticsSummary) -> Self {
        AnalyticsReport {
            generated_at: Utc::now(),
            source: source.into(),
            summary,
        }
    }
}

pub fn executor_ranking_rows(summary: &AnalyticsSummary) -> Vec<ExecutorRankingRow> {
    summary
        .executor_stats
        .iter()
        .enumerate()
        .map(|(idx, e)| ExecutorRankingRow {
            rank: idx + 1,
            executor: e.name.clone(),
            projects: e.project_count,
            total_cost: format_number(e.total_cost, 2),
            total_profit: format_number(e.total_profit, 2),
            avg_profit: format_number(e.average_profit(), 2),
            margin_pct: format_number(e.profit_margin_pct(), 2),
        })
        .collect()
}

pub fn status_rows(summary: &AnalyticsSummary) -> Vec<StatusRow> {
    summary
        .status_distribution
        .iter()
        .map(|(label, count)| StatusRow {
            status: label.to_string(),
            projects: count,
            share_pct: format_number(summary.status_share_pct(label), 2),
        })
        .collect()
}

pub fn payment_rows(summary: &AnalyticsSummary) -> Vec<PaymentRow> {
    [PaymentBucket::Unpaid, PaymentBucket::Partial, PaymentBucket::Paid]
        .into_iter()
        .map(|bucket| PaymentRow {
            bucket: bucket.label().to_string(),
            projects: summary.payment_status.count(bucket),
            share_pct: format_number(summary.payment_share_pct(bucket), 2),
        })
        .collect()
}
