//! Whole-document helpers.
//!
//! - [`to_csv`] - render rows into a `String`
//! - [`write_csv`] - create a file and write rows into it
//!
//! Both go through [`CsvWriter`], so the output is byte-identical to writing
//! the rows one by one.
//!
//! # Example
//!
//! ```rust,no_run
//! use csv4180::config::WriterConfig;
//! use csv4180::output::{to_csv, write_csv};
//!
//! let rows = vec![
//!     vec!["id", "comment"],
//!     vec!["1", "fine, thanks"],
//! ];
//!
//! let text = to_csv(&rows)?;
//! assert_eq!(text, "id,comment\r\n1,\"fine, thanks\"");
//!
//! write_csv(&rows, "comments.csv", &WriterConfig::new())?;
//! # Ok::<(), csv4180::Csv4180Error>(())
//! ```

use std::fs::File;
use std::io;
use std::path::Path;

use log::debug;

use crate::config::WriterConfig;
use crate::error::Result;
use crate::field::AsField;
use crate::writer::CsvWriter;

/// Renders `rows` as CSV text.
pub fn to_csv<R>(rows: R) -> Result<String>
where
    R: IntoIterator,
    R::Item: IntoIterator,
    <R::Item as IntoIterator>::Item: AsField,
{
    let mut writer = CsvWriter::new(Vec::new());
    let count = write_rows(&mut writer, rows)?;
    // Every byte written came from a `&str` or is ASCII, so this cannot fail.
    let text = String::from_utf8(writer.into_inner()?)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    debug!("Rendered {} rows ({} bytes)", count, text.len());
    Ok(text)
}

/// Writes `rows` to a new file at `path`, replacing any existing file.
///
/// The file is flushed before returning, so any write error is reported here
/// rather than lost on drop.
pub fn write_csv<R, P>(rows: R, path: P, config: &WriterConfig) -> Result<()>
where
    R: IntoIterator,
    R::Item: IntoIterator,
    <R::Item as IntoIterator>::Item: AsField,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("Creating CSV file: {}", path.display());
    let file = File::create(path)?;

    let mut writer = CsvWriter::with_config(config, file);
    let count = write_rows(&mut writer, rows)?;
    writer.flush()?;

    debug!("Wrote {} rows to {}", count, path.display());
    Ok(())
}

fn write_rows<W, R>(writer: &mut CsvWriter<W>, rows: R) -> Result<usize>
where
    W: io::Write,
    R: IntoIterator,
    R::Item: IntoIterator,
    <R::Item as IntoIterator>::Item: AsField,
{
    let mut count = 0;
    for row in rows {
        writer.write_row(row)?;
        count += 1;
    }
    Ok(count)
}
