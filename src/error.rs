//! Error reporting for [`BoundedStr`](crate::BoundedStr).
//!
//! Operations on a bounded string never fail outright. They truncate or return
//! an empty result and record what happened in a sticky [`ErrorFlags`] set,
//! which the caller reads back whenever it cares to.

use bitflags::bitflags;
use core::{error::Error as CoreError, fmt};

bitflags! {
    /// Sticky error bits carried by every [`BoundedStr`](crate::BoundedStr).
    ///
    /// Bits accumulate: copies, appends and substrings OR the source bits into
    /// the result. Only operations that replace the whole content reset them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ErrorFlags: u8 {
        /// A write was truncated because it did not fit the capacity.
        const OVERFLOW = 0b0000_0001;
        /// A substring started past the content, or its range was inverted.
        const OUT_OF_RANGE = 0b0000_0010;
    }
}

impl ErrorFlags {
    /// The most significant error in the set, overflow first.
    pub fn first_error(self) -> Option<Error> {
        if self.contains(Self::OVERFLOW) {
            Some(Error::Overflow)
        } else if self.contains(Self::OUT_OF_RANGE) {
            Some(Error::OutOfRange)
        } else {
            None
        }
    }
}

/// A single error condition, as returned by
/// [`BoundedStr::check`](crate::BoundedStr::check).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Content was truncated to fit the fixed capacity.
    Overflow,
    /// A positional request was outside the current content.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => f.write_str("capacity exceeded, content truncated"),
            Self::OutOfRange => f.write_str("position out of range"),
        }
    }
}

impl CoreError for Error {}

impl From<Error> for ErrorFlags {
    fn from(value: Error) -> Self {
        match value {
            Error::Overflow => Self::OVERFLOW,
            Error::OutOfRange => Self::OUT_OF_RANGE,
        }
    }
}
