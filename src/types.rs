use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use tabled::Tabled;

/// Row shape of a CSV project export. Every column is optional; numbers
/// arrive as text and are parsed by the loader.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Id")]
    pub id: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "ProjectCost")]
    pub project_cost: Option<String>,
    #[serde(rename = "PaidTotal")]
    pub paid_total: Option<String>,
    #[serde(rename = "ExecutorCost")]
    pub executor_cost: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "ExecutorId")]
    pub executor_id: Option<String>,
    #[serde(rename = "ExecutorDisplayName")]
    pub executor_display_name: Option<String>,
    #[serde(rename = "ExecutorFullName")]
    pub executor_full_name: Option<String>,
    #[serde(rename = "ExecutorUsername")]
    pub executor_username: Option<String>,
}

/// The person a project is assigned to.
///
/// Name candidates are resolved in field order: `display_name`, then
/// `full_name`, then `username`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Executor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Executor {
    pub fn named(name: &str) -> Self {
        Executor {
            display_name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

/// One project as supplied by whatever source feeds the dashboard.
///
/// Absent numbers count as zero and an absent or empty status is its own
/// bucket; see [`crate::analytics::compute`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub project_cost: Option<f64>,
    #[serde(default)]
    pub paid_total: Option<f64>,
    #[serde(default)]
    pub executor_cost: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub assigned_executor: Option<Executor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentBucket {
    Unpaid,
    Partial,
    Paid,
}

impl PaymentBucket {
    pub fn label(self) -> &'static str {
        match self {
            PaymentBucket::Unpaid => "Unpaid",
            PaymentBucket::Partial => "Partial",
            PaymentBucket::Paid => "Paid",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaymentStatus {
    pub unpaid: usize,
    pub partial: usize,
    pub paid: usize,
}

impl PaymentStatus {
    pub fn record(&mut self, bucket: PaymentBucket) {
        match bucket {
            PaymentBucket::Unpaid => self.unpaid += 1,
            PaymentBucket::Partial => self.partial += 1,
            PaymentBucket::Paid => self.paid += 1,
        }
    }

    pub fn count(&self, bucket: PaymentBucket) -> usize {
        match bucket {
            PaymentBucket::Unpaid => self.unpaid,
            PaymentBucket::Partial => self.partial,
            PaymentBucket::Paid => self.paid,
        }
    }

    pub fn total(&self) -> usize {
        self.unpaid + self.partial + self.paid
    }
}

/// Label -> count mapping that iterates in the order labels were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusDistribution {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl StatusDistribution {
    pub fn increment(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), 1));
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).map(|&pos| self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

// Serialized as a JSON object whose keys keep first-seen order.
impl Serialize for StatusDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorStat {
    pub name: String,
    pub project_count: usize,
    pub total_cost: f64,
    pub total_profit: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_projects: usize,
    pub total_cost: f64,
    pub total_paid: f64,
    pub total_executor_cost: f64,
    pub total_profit: f64,
    pub fully_paid_count: usize,
    pub status_distribution: StatusDistribution,
    pub payment_status: PaymentStatus,
    pub executor_stats: Vec<ExecutorStat>,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct ExecutorRankingRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Executor")]
    #[tabled(rename = "Executor")]
    pub executor: String,
    #[serde(rename = "Projects")]
    #[tabled(rename = "Projects")]
    pub projects: usize,
    #[serde(rename = "TotalCost")]
    #[tabled(rename = "TotalCost")]
    pub total_cost: String,
    #[serde(rename = "TotalProfit")]
    #[tabled(rename = "TotalProfit")]
    pub total_profit: String,
    #[serde(rename = "AvgProfit")]
    #[tabled(rename = "AvgProfit")]
    pub avg_profit: String,
    #[serde(rename = "MarginPct")]
    #[tabled(rename = "MarginPct")]
    pub margin_pct: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct StatusRow {
    #[serde(rename = "Status")]
    #[tabled(rename = "Status")]
    pub status: String,
    #[serde(rename = "Projects")]
    #[tabled(rename = "Projects")]
    pub projects: usize,
    #[serde(rename = "SharePct")]
    #[tabled(rename = "SharePct")]
    pub share_pct: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct PaymentRow {
    #[serde(rename = "Payment")]
    #[tabled(rename = "Payment")]
    pub bucket: String,
    #[serde(rename = "Projects")]
    #[tabled(rename = "Projects")]
    pub projects: usize,
    #[serde(rename = "SharePct")]
    #[tabled(rename = "SharePct")]
    pub share_pct: String,
}
