use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads the whole file, one entry per line with line terminators stripped.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the whole file.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let context = || format!("Error reading file {}", path.display());
    let file = File::open(path).wrap_err_with(context)?;
    BufReader::new(file)
        .split(b'\n')
        .map(|line| {
            line.map(|mut bytes| {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                String::from_utf8_lossy(&bytes).into_owned()
            })
        })
        .collect::<std::io::Result<Vec<_>>>()
        .wrap_err_with(context)
}
