//! Text formatting for [`BoundedStr`](crate::BoundedStr).
//!
//! Content is bytes, so `Display` and `Debug` render invalid UTF-8 as U+FFFD.
//! `fmt::Write` lets `write!` append into a string without allocating.

use crate::{until_nul, BoundedStr, ErrorFlags};
use core::fmt::{self, Formatter, Write};

// Writes the content, replacing invalid UTF-8 with U+FFFD.
fn write_lossy(bytes: &[u8], f: &mut Formatter<'_>) -> fmt::Result {
    for chunk in bytes.utf8_chunks() {
        f.write_str(chunk.valid())?;
        if !chunk.invalid().is_empty() {
            f.write_char(char::REPLACEMENT_CHARACTER)?;
        }
    }
    Ok(())
}

impl<const CAP: usize> fmt::Debug for BoundedStr<CAP> {
    /// Formats the `BoundedStr` for debugging.
    ///
    /// Output format: `BoundedStr<{CAP}>{"content"}`, with the error bits
    /// appended when any are set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = boundedstr!("test", 10);
    /// assert_eq!(format!("{:?}", s), "BoundedStr<10>{\"test\"}");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BoundedStr<{}>{{\"", CAP)?;
        write_lossy(self.as_bytes(), f)?;
        f.write_str("\"")?;
        if !self.error().is_empty() {
            write!(f, ", {:?}", self.error())?;
        }
        f.write_str("}")
    }
}

impl<const CAP: usize> fmt::Display for BoundedStr<CAP> {
    /// Formats the content as text.
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = boundedstr!("Hello", 10);
    /// assert_eq!(format!("{}", s), "Hello");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_lossy(self.as_bytes(), f)
    }
}

impl<const CAP: usize> Write for BoundedStr<CAP> {
    /// Appends formatted text without allocating.
    ///
    /// Returns `fmt::Error` once text had to be dropped; the string keeps
    /// what fit and has [`ErrorFlags::OVERFLOW`] set.
    ///
    /// ```rust
    /// use boundedstr::*;
    /// use core::fmt::Write;
    /// let mut s = BoundedStr::<12>::new();
    /// write!(s, "t={}ms", 250).unwrap();
    /// assert_eq!(s, "t=250ms");
    /// assert!(write!(s, " and more").is_err());
    /// assert_eq!(s, "t=250ms and ");
    /// ```
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let wanted = until_nul(s.as_bytes()).len();
        if self.push_str(s) < wanted {
            debug_assert!(self.error().contains(ErrorFlags::OVERFLOW));
            return Err(fmt::Error);
        }
        Ok(())
    }
}
