// Built-in demo projects used when no input file is configured.
use crate::types::{Executor, ProjectRecord};
use once_cell::sync::Lazy;

fn demo(
    id: &str,
    title: &str,
    cost: Option<f64>,
    paid: Option<f64>,
    executor_cost: Option<f64>,
    status: Option<&str>,
    executor: Option<Executor>,
) -> ProjectRecord {
    ProjectRecord {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        project_cost: cost,
        paid_total: paid,
        executor_cost,
        status: status.map(str::to_string),
        assigned_executor: executor,
    }
}

pub static DEMO_PROJECTS: Lazy<Vec<ProjectRecord>> = Lazy::new(|| {
    let ivan = || Some(Executor::named("Ivan Sokolov"));
    let maria = || {
        Some(Executor {
            id: Some("e-2".to_string()),
            full_name: Some("Maria Orlova".to_string()),
            username: Some("morlova".to_string()),
            ..Default::default()
        })
    };
    let nameless = || {
        Some(Executor {
            id: Some("e-9".to_string()),
            ..Default::default()
        })
    };
    vec![
        demo("p-101", "Landing page redesign", Some(120_000.0), Some(120_000.0), Some(60_000.0), Some("completed"), ivan()),
        demo("p-102", "Mobile app MVP", Some(450_000.0), Some(150_000.0), Some(280_000.0), Some("in_progress"), maria()),
        demo("p-103", "CRM integration", Some(80_000.0), Some(0.0), Some(35_000.0), Some("new"), ivan()),
        demo("p-104", "SEO audit", Some(25_000.0), Some(25_000.0), Some(10_000.0), Some("completed"), None),
        demo("p-105", "Logo refresh", Some(15_000.0), None, Some(18_000.0), None, nameless()),
        demo("p-106", "Internal wiki", Some(0.0), Some(0.0), None, Some(""), None),
        demo("p-107", "Payment gateway", Some(200_000.0), Some(90_000.0), Some(120_000.0), Some("in_progress"), maria()),
        demo("p-108", "Support retainer", None, Some(5_000.0), None, Some("on_hold"), ivan()),
    ]
});

pub fn demo_projects() -> Vec<ProjectRecord> {
    DEMO_PROJECTS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{compute, NO_STATUS_LABEL, UNNAMED_EXECUTOR_LABEL};

    #[test]
    fn test_demo_data_covers_every_bucket() {
        let s = compute(&demo_projects());
        assert_eq!(s.total_projects, 8);
        assert!(s.payment_status.unpaid > 0);
        assert!(s.payment_status.partial > 0);
        assert!(s.payment_status.paid > 0);
        assert_eq!(s.status_distribution.get(NO_STATUS_LABEL), Some(2));
        assert!(s
            .executor_stats
            .iter()
            .any(|e| e.name == UNNAMED_EXECUTOR_LABEL));
    }
}
