use crate::demo::demo_projects;
use crate::error::{AnalyticsError, Result};
use crate::types::{Executor, ProjectRecord, RawRow};
use crate::util::{non_empty, parse_f64_safe};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    pub parse_errors: usize,
}

/// Where the project collection comes from. The aggregation does not care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSource {
    Demo,
    File(PathBuf),
}

impl ProjectSource {
    pub fn from_input(input: Option<PathBuf>) -> Self {
        input.map_or(ProjectSource::Demo, ProjectSource::File)
    }

    pub fn describe(&self) -> String {
        match self {
            ProjectSource::Demo => "demo data".to_string(),
            ProjectSource::File(path) => path.display().to_string(),
        }
    }

    pub fn load(&self) -> Result<(Vec<ProjectRecord>, LoadReport)> {
        match self {
            ProjectSource::Demo => {
                let data = demo_projects();
                let report = LoadReport {
                    total_rows: data.len(),
                    loaded_rows: data.len(),
                    parse_errors: 0,
                };
                Ok((data, report))
            }
            ProjectSource::File(path) => load_projects(path),
        }
    }
}

enum InputFormat {
    Json,
    Csv,
}

fn detect_format(path: &Path) -> Result<InputFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => Ok(InputFormat::Json),
        "csv" => Ok(InputFormat::Csv),
        _ => Err(AnalyticsError::UnsupportedFormat(path.display().to_string())),
    }
}

pub fn load_projects(path: &Path) -> Result<(Vec<ProjectRecord>, LoadReport)> {
    let format = detect_format(path)?;
    let file = File::open(path).map_err(|e| AnalyticsError::io(path, e))?;
    let reader = BufReader::new(file);
    let loaded = match format {
        InputFormat::Json => read_json(reader)?,
        InputFormat::Csv => read_csv(reader)?,
    };
    log::info!(
        "loaded {} of {} project rows from {} ({} skipped)",
        loaded.1.loaded_rows,
        loaded.1.total_rows,
        path.display(),
        loaded.1.parse_errors
    );
    Ok(loaded)
}

/// A JSON array of project objects; missing keys and `null` both mean absent.
pub fn read_json<R: Read>(reader: R) -> Result<(Vec<ProjectRecord>, LoadReport)> {
    let data: Vec<ProjectRecord> = serde_json::from_reader(reader)?;
    let report = LoadReport {
        total_rows: data.len(),
        loaded_rows: data.len(),
        parse_errors: 0,
    };
    Ok((data, report))
}

pub fn read_csv<R: Read>(reader: R) -> Result<(Vec<ProjectRecord>, LoadReport)> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut total_rows = 0usize;
    let mut parse_errors = 0usize;
    let mut data: Vec<ProjectRecord> = Vec::new();

    for result in rdr.deserialize::<RawRow>() {
        total_rows += 1;
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("skipping row {}: {}", total_rows, e);
                parse_errors += 1;
                continue;
            }
        };
        match clean_row(row) {
            Some(record) => data.push(record),
            None => {
                log::warn!("skipping row {}: malformed number", total_rows);
                parse_errors += 1;
            }
        }
    }

    let report = LoadReport {
        total_rows,
        loaded_rows: data.len(),
        parse_errors,
    };
    Ok((data, report))
}

/// Blank numeric cells stay absent; a non-blank cell that does not parse
/// rejects the whole row.
fn parse_amount(raw: Option<String>) -> std::result::Result<Option<f64>, ()> {
    match non_empty(raw) {
        None => Ok(None),
        Some(s) => parse_f64_safe(Some(&s)).map(Some).ok_or(()),
    }
}

fn clean_row(row: RawRow) -> Option<ProjectRecord> {
    let project_cost = parse_amount(row.project_cost).ok()?;
    let paid_total = parse_amount(row.paid_total).ok()?;
    let executor_cost = parse_amount(row.executor_cost).ok()?;

    let executor = Executor {
        id: non_empty(row.executor_id),
        display_name: non_empty(row.executor_display_name),
        full_name: non_empty(row.executor_full_name),
        username: non_empty(row.executor_username),
    };
    let assigned_executor = (executor != Executor::default()).then_some(executor);

    Some(ProjectRecord {
        id: non_empty(row.id),
        title: non_empty(row.title),
        project_cost,
        paid_total,
        executor_cost,
        // Kept verbatim: an empty cell becomes the "no status" bucket later.
        status: row.status,
        assigned_executor,
    })
}
