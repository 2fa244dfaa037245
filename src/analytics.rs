// Statistics aggregation behind the analytics dashboard.
//
// `compute` is a pure pass over borrowed records: it never fails, never
// mutates its input and allocates a fresh summary on every call.
use crate::types::{
    AnalyticsSummary, Executor, ExecutorStat, PaymentBucket, PaymentStatus, ProjectRecord,
    StatusDistribution,
};
use crate::util::{percent_of, safe_ratio};
use std::collections::HashMap;

/// Bucket for records whose status is absent or empty.
pub const NO_STATUS_LABEL: &str = "No status";

/// Name given to executors with no usable name candidate. All such
/// executors share one bucket.
pub const UNNAMED_EXECUTOR_LABEL: &str = "Unnamed";

pub fn compute(projects: &[ProjectRecord]) -> AnalyticsSummary {
    let mut total_cost = 0.0;
    let mut total_paid = 0.0;
    let mut total_executor_cost = 0.0;
    let mut status_distribution = StatusDistribution::default();
    let mut payment_status = PaymentStatus::default();

    for p in projects {
        total_cost += p.project_cost.unwrap_or(0.0);
        total_paid += p.paid_total.unwrap_or(0.0);
        total_executor_cost += p.executor_cost.unwrap_or(0.0);
        status_distribution.increment(status_label(p));
        payment_status.record(classify_payment(p));
    }

    let executor_stats = rank_executors(projects);
    log::debug!(
        "aggregated {} projects into {} statuses and {} executors",
        projects.len(),
        status_distribution.len(),
        executor_stats.len()
    );

    AnalyticsSummary {
        total_projects: projects.len(),
        total_cost,
        total_paid,
        total_executor_cost,
        total_profit: total_cost - total_executor_cost,
        fully_paid_count: payment_status.paid,
        status_distribution,
        payment_status,
        executor_stats,
    }
}

pub fn status_label(project: &ProjectRecord) -> &str {
    match project.status.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => NO_STATUS_LABEL,
    }
}

/// Order matters: a zero payment is `Unpaid` even when the cost is zero too.
pub fn classify_payment(project: &ProjectRecord) -> PaymentBucket {
    let paid = project.paid_total.unwrap_or(0.0);
    let cost = project.project_cost.unwrap_or(0.0);
    if paid == 0.0 {
        PaymentBucket::Unpaid
    } else if paid < cost {
        PaymentBucket::Partial
    } else {
        PaymentBucket::Paid
    }
}

pub fn executor_name(executor: &Executor) -> &str {
    [
        executor.display_name.as_deref(),
        executor.full_name.as_deref(),
        executor.username.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|name| !name.is_empty())
    .unwrap_or(UNNAMED_EXECUTOR_LABEL)
}

/// Groups assigned projects by resolved executor name and sorts the groups
/// by profit, highest first. Equal profits keep first-seen order.
pub fn rank_executors(projects: &[ProjectRecord]) -> Vec<ExecutorStat> {
    let mut stats: Vec<ExecutorStat> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for p in projects {
        let Some(executor) = p.assigned_executor.as_ref() else {
            continue;
        };
        let name = executor_name(executor);
        let pos = *index.entry(name).or_insert_with(|| {
            stats.push(ExecutorStat {
                name: name.to_string(),
                project_count: 0,
                total_cost: 0.0,
                total_profit: 0.0,
            });
            stats.len() - 1
        });
        let cost = p.project_cost.unwrap_or(0.0);
        let stat = &mut stats[pos];
        stat.project_count += 1;
        stat.total_cost += cost;
        stat.total_profit += cost - p.executor_cost.unwrap_or(0.0);
    }

    // `sort_by` is stable; `total_cmp` keeps NaN profits from breaking the order.
    stats.sort_by(|a, b| b.total_profit.total_cmp(&a.total_profit));
    stats
}

impl AnalyticsSummary {
    pub fn status_share_pct(&self, label: &str) -> f64 {
        let count = self.status_distribution.get(label).unwrap_or(0);
        percent_of(count as f64, self.total_projects as f64)
    }

    pub fn payment_share_pct(&self, bucket: PaymentBucket) -> f64 {
        percent_of(
            self.payment_status.count(bucket) as f64,
            self.total_projects as f64,
        )
    }

    pub fn average_profit_per_project(&self) -> f64 {
        safe_ratio(self.total_profit, self.total_projects as f64)
    }

    pub fn profit_margin_pct(&self) -> f64 {
        percent_of(self.total_profit, self.total_cost)
    }

    pub fn paid_share_pct(&self) -> f64 {
        percent_of(self.total_paid, self.total_cost)
    }
}

impl ExecutorStat {
    pub fn average_profit(&self) -> f64 {
        safe_ratio(self.total_profit, self.project_count as f64)
    }

    pub fn profit_margin_pct(&self) -> f64 {
        percent_of(self.total_profit, self.total_cost)
    }
}
