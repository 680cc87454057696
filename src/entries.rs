use time::Date;
use time::macros::format_description;

pub const SEPARATOR: &str = "==";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueItem {
    pub due_date: Date,
    pub name: String,
}

/// Reason a line was left out of the schedule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Skip {
    #[error("Skipping invalid entry: {line}")]
    MissingSeparator { line: String },
    #[error("Skipping invalid date format: {date}")]
    InvalidDate { date: String },
}

/// Result of parsing a whole file. Bad lines never abort parsing, they end up in `skipped`.
#[derive(Debug, Default)]
pub struct Parsed {
    pub items: Vec<DueItem>,
    pub skipped: Vec<Skip>,
}

pub fn parse_line(line: &str) -> Result<DueItem, Skip> {
    let Some((date, name)) = line.split_once(SEPARATOR) else {
        return Err(Skip::MissingSeparator {
            line: line.to_owned(),
        });
    };
    // `[year]` takes an optional sign, the file format has none
    let due_date = date
        .starts_with(|c: char| c.is_ascii_digit())
        .then(|| Date::parse(date, format_description!("[year]-[month]-[day]")).ok())
        .flatten()
        .ok_or_else(|| Skip::InvalidDate {
            date: date.to_owned(),
        })?;
    Ok(DueItem {
        due_date,
        name: name.to_owned(),
    })
}

pub fn parse_entries<I, S>(lines: I) -> Parsed
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .fold(Parsed::default(), |mut parsed, line| {
            match parse_line(line.as_ref()) {
                Ok(item) => parsed.items.push(item),
                Err(skip) => parsed.skipped.push(skip),
            }
            parsed
        })
}

/// Orders by due date. Entries due the same day keep their file order.
pub fn sort_by_due(items: &mut [DueItem]) {
    items.sort_by_key(|item| item.due_date);
}
