use std::path::PathBuf;
use time::Date;

pub fn date_value_parser(v: &str) -> Result<Date, time::error::Parse> {
    Date::parse(v, &time::format_description::well_known::Iso8601::DATE)
}

/// File name of the running executable, for the usage line.
pub fn program_name() -> String {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            std::env::args_os()
                .next()
                .map(PathBuf::from)
                .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}
