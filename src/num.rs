//! Integer to decimal text.
//!
//! Numbers are rendered by `itoa` into a staging buffer large enough for any
//! value of any primitive integer width, then stored with the usual
//! truncation rule.

use crate::BoundedStr;
use itoa::Integer;

impl<const CAP: usize> BoundedStr<CAP> {
    /// Constructs a `BoundedStr` from the decimal form of an integer.
    ///
    /// Negative values get a leading `-`. Digits that do not fit are cut and
    /// [`ErrorFlags::OVERFLOW`](crate::ErrorFlags::OVERFLOW) is set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// assert_eq!(BoundedStr::<8>::from_int(-42i32), "-42");
    /// assert_eq!(BoundedStr::<8>::from_int(200u8), "200");
    ///
    /// let cut = BoundedStr::<3>::from_int(12345u32);
    /// assert_eq!(cut, "123");
    /// assert_eq!(cut.error(), ErrorFlags::OVERFLOW);
    /// ```
    pub fn from_int<I: Integer>(value: I) -> Self {
        let mut staging = itoa::Buffer::new();
        Self::from_str(staging.format(value))
    }

    /// Replaces the content with the decimal form of an integer.
    pub fn assign_int<I: Integer>(&mut self, value: I) {
        let mut staging = itoa::Buffer::new();
        self.assign(staging.format(value));
    }

    /// Appends the decimal form of an integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let mut s = boundedstr!("port ", 10);
    /// s.push_int(8080u16);
    /// assert_eq!(s, "port 8080");
    /// ```
    pub fn push_int<I: Integer>(&mut self, value: I) -> usize {
        let mut staging = itoa::Buffer::new();
        self.push_str(staging.format(value))
    }
}

// `u8` is left out: `From<u8>` is the single-character constructor.
macro_rules! impl_from_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl<const CAP: usize> From<$int> for BoundedStr<CAP> {
                fn from(value: $int) -> Self {
                    Self::from_int(value)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize);
