//! Field escaping rules.
//!
//! Every field falls into one of three cases, checked in this order:
//!
//! | Field contains            | Output                                   |
//! |---------------------------|------------------------------------------|
//! | at least one `"`          | wrapped in `"`, each inner `"` doubled   |
//! | `,`, `\r` or `\n`         | wrapped in `"`, content verbatim         |
//! | none of the above         | verbatim                                 |
//!
//! Quotes are only added where a reader would otherwise split the field, and
//! doubling is only done when there is a quote to double. Empty fields are
//! plain (zero characters).
//!
//! # Example
//!
//! ```rust
//! use csv4180::escape::{Escape, classify, escape};
//!
//! assert_eq!(classify("plain"), Escape::Plain);
//! assert_eq!(classify("x,y"), Escape::Quote);
//! assert_eq!(classify("say \"hi\""), Escape::QuoteAndDouble);
//!
//! assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
//! ```

use std::borrow::Cow;
use std::io::{self, Write};

use memchr::{memchr, memchr3, memchr_iter};

const QUOTE: u8 = b'"';

/// How a field has to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Escape {
    /// Written as-is.
    Plain,
    /// Contains a separator or line break but no quotes: wrapped in quotes.
    Quote,
    /// Contains quotes: wrapped in quotes with every inner quote doubled.
    QuoteAndDouble,
}

impl Escape {
    /// Returns `true` if the field is wrapped in quotes.
    pub fn is_quoted(self) -> bool {
        !matches!(self, Escape::Plain)
    }
}

/// Decides how `field` must be written.
pub fn classify(field: &str) -> Escape {
    let bytes = field.as_bytes();
    if memchr(QUOTE, bytes).is_some() {
        Escape::QuoteAndDouble
    } else if memchr3(b',', b'\r', b'\n', bytes).is_some() {
        Escape::Quote
    } else {
        Escape::Plain
    }
}

/// Returns `true` if `field` would be wrapped in quotes.
pub fn needs_quoting(field: &str) -> bool {
    classify(field).is_quoted()
}

/// Returns `field` as it appears in CSV output.
///
/// Borrows when no escaping is needed.
pub fn escape(field: &str) -> Cow<'_, str> {
    match classify(field) {
        Escape::Plain => Cow::Borrowed(field),
        Escape::Quote => Cow::Owned(format!("\"{field}\"")),
        Escape::QuoteAndDouble => {
            let mut out = String::with_capacity(field.len() + 4);
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
            Cow::Owned(out)
        }
    }
}

/// Writes `field` to `out` according to `escape`.
///
/// `escape` must be the result of [`classify`] for the same field.
pub(crate) fn write_escaped<W: Write>(out: &mut W, field: &str, escape: Escape) -> io::Result<()> {
    let bytes = field.as_bytes();
    match escape {
        Escape::Plain => out.write_all(bytes),
        Escape::Quote => {
            out.write_all(b"\"")?;
            out.write_all(bytes)?;
            out.write_all(b"\"")
        }
        Escape::QuoteAndDouble => {
            out.write_all(b"\"")?;
            // Each chunk ends on a quote; writing that quote once more doubles it.
            let mut start = 0;
            for pos in memchr_iter(QUOTE, bytes) {
                out.write_all(&bytes[start..=pos])?;
                out.write_all(b"\"")?;
                start = pos + 1;
            }
            out.write_all(&bytes[start..])?;
            out.write_all(b"\"")
        }
    }
}
