//! Writer configuration.
//!
//! There is no configuration file; [`WriterConfig`] is a plain struct meant to
//! be built in code (or deserialized by the caller from wherever they keep
//! settings).
//!
//! # Example
//!
//! ```rust
//! use csv4180::config::WriterConfig;
//! use csv4180::CsvWriter;
//!
//! let config = WriterConfig::new().with_buffer_size(64 * 1024);
//! let mut writer = CsvWriter::with_config(&config, Vec::new());
//! writer.write_row(["id", "name"])?;
//! # Ok::<(), csv4180::Csv4180Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// Default output buffer size (8KB), matching `std::io::BufWriter`.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Configuration for [`CsvWriter`](crate::CsvWriter).
///
/// The output format itself is fixed (comma separator, CRLF terminator,
/// double-quote quoting), so the only knob is how much output is buffered
/// before it reaches the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Output buffer capacity in bytes (default: 8KB).
    ///
    /// `0` disables buffering: every write goes straight to the sink, so sink
    /// errors surface on the call that caused them.
    pub buffer_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl WriterConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that forwards every write to the sink.
    pub fn unbuffered() -> Self {
        Self { buffer_size: 0 }
    }

    /// Sets the output buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Returns `true` if writes are buffered before reaching the sink.
    pub fn is_buffered(&self) -> bool {
        self.buffer_size > 0
    }
}
