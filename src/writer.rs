//! The RFC 4180 writer.

use std::io::{BufWriter, Write};

use log::trace;

use crate::config::WriterConfig;
use crate::error::Result;
use crate::escape::{classify, write_escaped};
use crate::field::AsField;

const FIELD_SEPARATOR: &[u8] = b",";
const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Writes rows of text fields as RFC 4180 CSV.
///
/// Fields are separated by `,` and records by `\r\n`. A terminator is written
/// *between* rows only, so the output never starts or ends with a blank line.
/// Quoting is applied only to fields that contain `"`, `,`, `\r` or `\n`.
///
/// The writer owns a buffer in front of the sink. Call [`flush`](Self::flush)
/// or [`into_inner`](Self::into_inner) to make sure everything reached the
/// sink and to see any error; dropping the writer flushes too but discards
/// errors.
///
/// # Example
///
/// ```rust
/// use csv4180::CsvWriter;
///
/// let mut writer = CsvWriter::new(Vec::new());
/// writer.write_row(["a", "b"])?;
/// writer.write_row(["c", "d"])?;
///
/// assert_eq!(writer.into_inner()?, b"a,b\r\nc,d");
/// # Ok::<(), csv4180::Csv4180Error>(())
/// ```
#[derive(Debug)]
pub struct CsvWriter<W: Write> {
    inner: BufWriter<W>,
    /// No field has been written on the current line yet.
    at_line_start: bool,
    /// No row has been started through `write_row` yet.
    at_stream_start: bool,
}

impl<W: Write> CsvWriter<W> {
    /// Creates a writer with the default buffer size.
    pub fn new(sink: W) -> Self {
        Self::with_config(&WriterConfig::default(), sink)
    }

    /// Creates a writer whose buffer holds `capacity` bytes.
    ///
    /// Arguments follow [`BufWriter::with_capacity`]: capacity first, sink second.
    pub fn with_capacity(capacity: usize, sink: W) -> Self {
        Self {
            inner: BufWriter::with_capacity(capacity, sink),
            at_line_start: true,
            at_stream_start: true,
        }
    }

    /// Creates a writer from a [`WriterConfig`].
    pub fn with_config(config: &WriterConfig, sink: W) -> Self {
        Self::with_capacity(config.buffer_size, sink)
    }

    /// Writes a new record.
    ///
    /// Every row after the first is preceded by `\r\n`, closing the previous
    /// one. Fields are written in order with [`write_field`](Self::write_field).
    ///
    /// # Example
    ///
    /// ```rust
    /// use csv4180::CsvWriter;
    ///
    /// let mut writer = CsvWriter::new(Vec::new());
    /// writer.write_row(["x,y", "says \"hi\"", "line1\nline2"])?;
    ///
    /// let out = String::from_utf8(writer.into_inner()?).unwrap();
    /// assert_eq!(out, "\"x,y\",\"says \"\"hi\"\"\",\"line1\nline2\"");
    /// # Ok::<(), csv4180::Csv4180Error>(())
    /// ```
    pub fn write_row<I>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsField,
    {
        if self.at_stream_start {
            self.at_stream_start = false;
        } else {
            self.new_line()?;
        }
        for field in fields {
            self.write_field(field)?;
        }
        Ok(())
    }

    /// Writes one field, preceded by `,` unless it is the first on the line.
    ///
    /// `None` and `""` both write nothing but still occupy a field position.
    pub fn write_field<F: AsField>(&mut self, field: F) -> Result<()> {
        if self.at_line_start {
            self.at_line_start = false;
        } else {
            self.inner.write_all(FIELD_SEPARATOR)?;
        }

        let Some(text) = field.as_field().filter(|s| !s.is_empty()) else {
            return Ok(());
        };
        write_escaped(&mut self.inner, text, classify(text))?;
        Ok(())
    }

    /// Writes the `\r\n` line terminator and starts a new line.
    ///
    /// [`write_row`](Self::write_row) calls this itself; it is only needed
    /// when building lines with [`write_field`](Self::write_field).
    pub fn new_line(&mut self) -> Result<()> {
        self.at_line_start = true;
        self.inner.write_all(LINE_TERMINATOR)?;
        Ok(())
    }

    /// Flushes the buffer and the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        trace!("Flushing {} buffered bytes", self.inner.buffer().len());
        self.inner.flush()?;
        Ok(())
    }

    /// Flushes the buffer and returns the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        trace!("Unwrapping CSV writer");
        self.inner
            .into_inner()
            .map_err(|e| e.into_error().into())
    }

    /// Returns a reference to the underlying sink.
    ///
    /// Bytes still in the buffer are not visible through it.
    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }

    /// Returns `true` if the next field starts a line.
    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Returns `true` if no row has been written yet.
    pub fn is_at_stream_start(&self) -> bool {
        self.at_stream_start
    }
}
