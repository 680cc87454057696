use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod cli;
mod config;
mod entries;
mod reader;
mod report;
mod urgency;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli.dispatch() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
