// Entry point and console flow.
//
// Option [1] loads projects from the configured source (file or demo data).
// Option [2] computes the analytics summary, writes the JSON summary and the
// executor ranking CSV, and prints previews. `--batch` runs both once.
use clap::Parser;
use once_cell::sync::Lazy;
use project_analytics::cli::{init_logging, Cli};
use project_analytics::loader::ProjectSource;
use project_analytics::report::{self, AnalyticsReport};
use project_analytics::types::ProjectRecord;
use project_analytics::{compute, output, util, AnalyticsError, Result};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

// Loaded once, reported on as many times as the user asks.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState { data: None }));

struct AppState {
    data: Option<Vec<ProjectRecord>>,
}

fn app_state() -> MutexGuard<'static, AppState> {
    APP_STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// `None` once stdin is closed.
fn read_choice() -> Option<String> {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

/// Returns `true` for `Y`, `false` for `N` or end of input.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to menu (Y/N): ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }
        match buf.trim().to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

fn handle_load(source: &ProjectSource) -> Result<()> {
    let (data, load_report) = source.load()?;
    println!(
        "Loaded {} projects from {} ({} rows read).",
        util::format_int(load_report.loaded_rows as u64),
        source.describe(),
        util::format_int(load_report.total_rows as u64)
    );
    if load_report.parse_errors > 0 {
        println!(
            "Note: {} rows skipped due to parse errors.",
            util::format_int(load_report.parse_errors as u64)
        );
    }
    println!();
    app_state().data = Some(data);
    Ok(())
}

fn handle_generate_reports(source: &ProjectSource, cli: &Cli) -> Result<()> {
    let data = app_state().data.clone().ok_or(AnalyticsError::NoData)?;
    let summary = compute(&data);

    let json_file = cli.out_dir.join("analytics_summary.json");
    output::write_json(&json_file, &AnalyticsReport::new(source.describe(), &summary))?;
    let ranking = report::executor_ranking_rows(&summary);
    let csv_file = cli.out_dir.join("executor_ranking.csv");
    output::write_csv(&csv_file, &ranking)?;

    println!("Project Analytics ({})\n", source.describe());
    println!(
        "Projects: {}   Cost: {}   Paid: {} ({}%)",
        util::format_int(summary.total_projects as u64),
        util::format_number(summary.total_cost, 2),
        util::format_number(summary.total_paid, 2),
        util::format_number(summary.paid_share_pct(), 2)
    );
    println!(
        "Executor cost: {}   Profit: {}   Margin: {}%   Avg profit/project: {}",
        util::format_number(summary.total_executor_cost, 2),
        util::format_number(summary.total_profit, 2),
        util::format_number(summary.profit_margin_pct(), 2),
        util::format_number(summary.average_profit_per_project(), 2)
    );
    println!(
        "Fully paid: {}\n",
        util::format_int(summary.fully_paid_count as u64)
    );

    println!("Status Distribution\n");
    output::preview_table_rows(&report::status_rows(&summary), cli.preview_rows);
    println!("Payment Status\n");
    output::preview_table_rows(&report::payment_rows(&summary), 3);
    println!("Executor Ranking (by profit)\n");
    output::preview_table_rows(&ranking, cli.preview_rows);

    println!(
        "(Summary exported to {}, ranking to {})\n",
        json_file.display(),
        csv_file.display()
    );
    Ok(())
}

fn report_error(e: AnalyticsError) {
    log::debug!("{:?}", e);
    eprintln!("Error: {}\n", e);
}

fn run_batch(source: &ProjectSource, cli: &Cli) -> Result<()> {
    handle_load(source)?;
    handle_generate_reports(source, cli)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    let source = ProjectSource::from_input(cli.input.clone());
    log::info!("project source: {}", source.describe());

    if cli.batch {
        if let Err(e) = run_batch(&source, &cli) {
            report_error(e);
            std::process::exit(1);
        }
        return;
    }

    loop {
        println!("Project Analytics");
        println!("[1] Load projects");
        println!("[2] Generate analytics\n");
        let Some(choice) = read_choice() else {
            break;
        };
        match choice.as_str() {
            "1" => {
                if let Err(e) = handle_load(&source) {
                    report_error(e);
                }
            }
            "2" => {
                println!();
                if let Err(e) = handle_generate_reports(&source, &cli) {
                    report_error(e);
                    continue;
                }
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            _ => {
                println!("Invalid choice. Please enter 1 or 2.\n");
            }
        }
    }
}
