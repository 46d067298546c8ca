use chrono::{Local, NaiveDate};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tvguide::core::config::{CliOverrides, load_config, resolve};
use tvguide::core::schedule::Schedule;
use tvguide::core::state::App;
use tvguide::tui;

#[derive(Parser)]
#[command(name = "tvguide", about = "Terminal electronic program guide")]
struct Args {
    /// Schedule JSON file (channels + programs). Uses a sample day when omitted.
    #[arg(short, long)]
    schedule: Option<PathBuf>,

    /// Day to show (YYYY-MM-DD). Defaults to the schedule's first day, then today.
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Lay the guide out right-to-left
    #[arg(long)]
    rtl: bool,

    /// Show times on a 12-hour clock
    #[arg(long)]
    twelve_hour: bool,

    /// Hide the channel sidebar
    #[arg(long)]
    no_sidebar: bool,

    /// Hide the hour timeline
    #[arg(long)]
    no_timeline: bool,

    /// Hide the "now" line
    #[arg(long)]
    no_line: bool,
}

/// `TVGUIDE_LOG` picks the file log level (default: debug).
fn log_level() -> LevelFilter {
    std::env::var("TVGUIDE_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Debug)
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to tvguide.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("tvguide.log") {
        let _ = WriteLogger::init(log_level(), log_config, log_file);
    }

    let config = load_config().map_err(std::io::Error::other)?;
    let cli = CliOverrides {
        schedule_file: args.schedule,
        rtl: args.rtl,
        twelve_hour: args.twelve_hour,
        no_sidebar: args.no_sidebar,
        no_timeline: args.no_timeline,
        no_line: args.no_line,
    };
    let resolved = resolve(&config, &cli).map_err(std::io::Error::other)?;

    let today = Local::now().date_naive();
    let (schedule, day) = match &resolved.schedule_file {
        Some(path) => {
            let schedule = Schedule::load(path).map_err(std::io::Error::other)?;
            let day = args.date.or_else(|| schedule.first_day()).unwrap_or(today);
            (schedule, day)
        }
        None => {
            let day = args.date.unwrap_or(today);
            log::info!("No schedule file given, using sample schedule for {}", day);
            (Schedule::sample(day), day)
        }
    };

    log::info!(
        "TV guide starting: {} channels, {} programs, day {}",
        schedule.channels.len(),
        schedule.programs.len(),
        day
    );

    tui::run(App::from_config(schedule, day, &resolved))
}
