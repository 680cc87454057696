use crate::entries::DueItem;
use crate::urgency::{Thresholds, Urgency, days_until};
use owo_colors::OwoColorize;
use serde::Deserialize;
use std::io::{self, Write};
use time::Date;

/// Applies the display style of an urgency tier to a line of text.
pub trait Render {
    fn render(&self, urgency: Urgency, text: &str) -> String;
}

pub struct Colored;

impl Render for Colored {
    fn render(&self, urgency: Urgency, text: &str) -> String {
        match urgency {
            Urgency::Low => text.green().to_string(),
            Urgency::Medium => text.yellow().to_string(),
            Urgency::High => text.red().to_string(),
        }
    }
}

pub struct Plain;

impl Render for Plain {
    fn render(&self, _urgency: Urgency, text: &str) -> String {
        text.to_owned()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

pub fn renderer(choice: ColorChoice) -> Box<dyn Render> {
    let colored = match choice {
        ColorChoice::Auto => console::colors_enabled(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    if colored {
        Box::new(Colored)
    } else {
        Box::new(Plain)
    }
}

pub fn format_item(item: &DueItem, days: i64) -> String {
    format!("{} - Remaining: {days}", item.name)
}

/// Writes one styled line per item, keeping the order of `items`.
pub fn report<W: Write>(
    out: &mut W,
    items: &[DueItem],
    today: Date,
    thresholds: &Thresholds,
    render: &dyn Render,
) -> io::Result<()> {
    for item in items {
        let days = days_until(today, item.due_date);
        let urgency = thresholds.classify(days);
        writeln!(out, "{}", render.render(urgency, &format_item(item, days)))?;
    }
    Ok(())
}
