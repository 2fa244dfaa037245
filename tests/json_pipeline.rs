use pretty_assertions::assert_eq;
use project_analytics::loader::{load_projects, ProjectSource};
use project_analytics::report::{executor_ranking_rows, AnalyticsReport};
use project_analytics::{compute, output, ExecutorStat, PaymentStatus};
use std::fs;

const PROJECTS_JSON: &str = r#"[
  {"id": "p1", "projectCost": 1000, "paidTotal": 1000, "executorCost": 400,
   "status": "in_progress", "assignedExecutor": {"displayName": "Ivan"}},
  {"id": "p2", "projectCost": 500, "paidTotal": 0, "executorCost": 200,
   "status": "new", "assignedExecutor": {"displayName": "Ivan"}},
  {"id": "p3", "projectCost": 800, "paidTotal": 400, "executorCost": 100,
   "status": "in_progress"}
]"#;

#[test]
fn json_file_to_report_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("projects.json");
    fs::write(&input, PROJECTS_JSON).unwrap();

    let (projects, load_report) = load_projects(&input).unwrap();
    assert_eq!(load_report.loaded_rows, 3);

    let summary = compute(&projects);
    assert_eq!(summary.total_cost, 2300.0);
    assert_eq!(summary.total_paid, 1400.0);
    assert_eq!(summary.total_executor_cost, 700.0);
    assert_eq!(summary.total_profit, 1600.0);
    assert_eq!(
        summary.payment_status,
        PaymentStatus { unpaid: 1, partial: 1, paid: 1 }
    );
    assert_eq!(
        summary.executor_stats,
        vec![ExecutorStat {
            name: "Ivan".to_string(),
            project_count: 2,
            total_cost: 1500.0,
            total_profit: 900.0,
        }]
    );

    let json_path = dir.path().join("analytics_summary.json");
    output::write_json(&json_path, &AnalyticsReport::new("projects.json", &summary)).unwrap();
    let written = fs::read_to_string(&json_path).unwrap();
    // First-seen status order survives serialization.
    let in_progress = written.find("\"in_progress\"").unwrap();
    let new = written.find("\"new\"").unwrap();
    assert!(in_progress < new);

    let csv_path = dir.path().join("executor_ranking.csv");
    output::write_csv(&csv_path, &executor_ranking_rows(&summary)).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Rank,Executor,Projects,TotalCost,TotalProfit,AvgProfit,MarginPct")
    );
    assert_eq!(
        lines.next(),
        Some("1,Ivan,2,\"1,500.00\",900.00,450.00,60.00")
    );
}

#[test]
fn demo_and_file_sources_feed_the_same_aggregation() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("projects.json");
    let (demo, _) = ProjectSource::Demo.load().unwrap();
    fs::write(&input, serde_json::to_string(&demo).unwrap()).unwrap();

    let (from_file, _) = ProjectSource::File(input).load().unwrap();
    assert_eq!(compute(&from_file), compute(&demo));
}
