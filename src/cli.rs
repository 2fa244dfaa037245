use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "project_analytics")]
#[command(about = "Project, payment and executor analytics for the back office", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project source (.json or .csv); demo data when omitted
    #[arg(short, long, value_name = "FILE", env = "PROJECT_ANALYTICS_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory for the generated report files
    #[arg(short, long, value_name = "DIR", env = "PROJECT_ANALYTICS_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Rows shown in each terminal preview table
    #[arg(long, default_value_t = 5)]
    pub preview_rows: usize,

    /// Load and generate once, then exit
    #[arg(long)]
    pub batch: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        let levels = [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
            LevelFilter::Trace,
        ];
        let base_idx = 2i16; // Warn
        let adjusted = (base_idx + i16::from(self.verbose) - i16::from(self.quiet))
            .clamp(0, (levels.len() - 1) as i16) as usize;
        levels[adjusted]
    }
}

pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .format_target(false)
        .filter_level(level)
        .parse_default_env()
        .init();
}
