//! # csv4180
//!
//! A small writer that turns rows of text fields into CSV as defined by
//! RFC 4180.
//!
//! ## Output Format
//!
//! - Fields are separated by `,`
//! - Records are separated by `\r\n`, on every platform. There is no
//!   terminator before the first record or after the last one.
//! - A field containing `"`, `,`, `\r` or `\n` is wrapped in `"`; every `"`
//!   inside it is written as `""`
//! - Any other field, including an empty or absent one, is written verbatim
//!
//! Quoting is applied only where a reader would otherwise misread the field,
//! so the output stays as short as the format allows.
//!
//! ## Quick Start
//!
//! ```rust
//! use csv4180::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut writer = CsvWriter::new(Vec::new());
//!     writer.write_row(["id", "comment"])?;
//!     writer.write_row(["1", "fine, thanks"])?;
//!     writer.write_row([Some("2"), None])?;
//!
//!     let text = String::from_utf8(writer.into_inner()?).unwrap();
//!     assert_eq!(text, "id,comment\r\n1,\"fine, thanks\"\r\n2,");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`writer`] — [`CsvWriter`], the stateful row/field writer
//! - [`escape`] — the quoting decision ([`classify`](escape::classify), [`escape`](escape::escape))
//! - [`field`] — [`AsField`], the values a field can be built from
//! - [`config`] — [`WriterConfig`](config::WriterConfig)
//! - [`output`] — [`to_csv`], [`write_csv`]
//! - [`error`] — [`Csv4180Error`], [`Result`]
//! - [`prelude`] — Convenient re-exports
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade (`debug` for file output, `trace`
//! for flushes). Install any `log` implementation to see it.

pub mod config;
pub mod error;
pub mod escape;
pub mod field;
pub mod output;
pub mod writer;

// Re-export the main types at the crate root for convenience
pub use error::{Csv4180Error, Result};
pub use field::AsField;
pub use output::{to_csv, write_csv};
pub use writer::CsvWriter;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use csv4180::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::WriterConfig;
    pub use crate::error::{Csv4180Error, Result};
    pub use crate::escape::{Escape, classify, escape, needs_quoting};
    pub use crate::field::AsField;
    pub use crate::output::{to_csv, write_csv};
    pub use crate::writer::CsvWriter;
}
