use crate::config::Config;
use crate::entries::{parse_entries, sort_by_due};
use crate::report::{ColorChoice, renderer, report};
use crate::reader::read_lines;
use clap::Parser;
use eyre::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use time::{Date, OffsetDateTime};

mod common;

use common::{date_value_parser, program_name};

/// Show how many days are left until each dated entry of a file
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// File with one `YYYY-MM-DD==name` entry per line
    file: Option<PathBuf>,
    /// Count days from this date instead of today, string in ISO8601 format
    #[arg(long, value_parser = date_value_parser)]
    today: Option<Date>,
    /// Colorize output by urgency
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,
    /// Fail instead of skipping malformed lines
    #[arg(long)]
    strict: bool,
    /// Read configuration from this file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    pub fn dispatch(self) -> Result<ExitCode> {
        let Some(file) = self.file else {
            println!("Usage: {} <filename>", program_name());
            return Ok(ExitCode::FAILURE);
        };

        let config = Config::load(self.config.as_deref())?;
        let lines = read_lines(&file)?;

        let mut parsed = parse_entries(&lines);
        for skip in &parsed.skipped {
            println!("{skip}");
        }
        if self.strict && !parsed.skipped.is_empty() {
            eyre::bail!("{} malformed line(s) in {}", parsed.skipped.len(), file.display());
        }

        sort_by_due(&mut parsed.items);

        let today = self.today.unwrap_or_else(local_today);
        let render = renderer(self.color.unwrap_or(config.color));
        let mut stdout = std::io::stdout().lock();
        report(
            &mut stdout,
            &parsed.items,
            today,
            &config.thresholds,
            render.as_ref(),
        )?;

        Ok(ExitCode::SUCCESS)
    }
}

fn local_today() -> Date {
    match OffsetDateTime::now_local() {
        Ok(now) => now.date(),
        Err(e) => {
            eprintln!("{} Unable to determine local time ({e}), using UTC", "Note:".cyan());
            OffsetDateTime::now_utc().date()
        }
    }
}
