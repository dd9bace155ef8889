//! Field values accepted by the writer.
//!
//! A field is optional text. `None` and `""` are written identically (zero
//! characters), so a row can mix owned, borrowed and optional values:
//!
//! ```rust
//! use csv4180::CsvWriter;
//!
//! let name = String::from("Alice");
//! let nickname: Option<&str> = None;
//!
//! let mut writer = CsvWriter::new(Vec::new());
//! writer.write_field(&name)?;
//! writer.write_field(nickname)?;
//! writer.write_field("admin")?;
//!
//! let bytes = writer.into_inner()?;
//! assert_eq!(bytes, b"Alice,,admin");
//! # Ok::<(), csv4180::Csv4180Error>(())
//! ```

use std::borrow::Cow;

/// A value that can be written as a single CSV field.
pub trait AsField {
    /// Returns the field text, or `None` for an absent field.
    fn as_field(&self) -> Option<&str>;
}

impl AsField for str {
    fn as_field(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsField for String {
    fn as_field(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsField for Cow<'_, str> {
    fn as_field(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: AsRef<str>> AsField for Option<T> {
    fn as_field(&self) -> Option<&str> {
        self.as_ref().map(AsRef::as_ref)
    }
}

impl<T: AsField + ?Sized> AsField for &T {
    fn as_field(&self) -> Option<&str> {
        (**self).as_field()
    }
}

impl<T: AsField + ?Sized> AsField for Box<T> {
    fn as_field(&self) -> Option<&str> {
        (**self).as_field()
    }
}
