//! Unified error types for csv4180.
//!
//! The writer has exactly one failure mode: the underlying sink reported an
//! I/O error. That error is handed back unchanged, wrapped in
//! [`Csv4180Error::Io`], and the call that hit it is aborted. Nothing is
//! retried and nothing is rolled back; bytes already accepted by the sink
//! stay there.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for csv4180 operations.
///
/// # Example
///
/// ```rust
/// use csv4180::error::Result;
///
/// fn export() -> Result<String> {
///     csv4180::to_csv([["a", "b"]])
/// }
/// # assert_eq!(export().unwrap(), "a,b");
/// ```
pub type Result<T> = std::result::Result<T, Csv4180Error>;

/// The error type for all csv4180 operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Csv4180Error {
    /// The output sink failed.
    ///
    /// Typical causes:
    /// - Disk is full
    /// - Broken pipe
    /// - The sink was already closed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Csv4180Error {
    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, Csv4180Error::Io(_))
    }

    /// Returns the [`io::ErrorKind`] of an IO error, if this is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Csv4180Error::Io(e) => Some(e.kind()),
        }
    }
}
