#![cfg_attr(not(feature = "std"), no_std)]
//! # BoundedStr — fixed-capacity, null-terminated string
//!
//! A stack-allocated string with a capacity fixed at compile time, built for
//! environments where heap allocation is unwelcome. Content is a sequence of
//! single bytes kept null-terminated at all times, so it can be handed to C
//! APIs directly.
//!
//! Nothing panics or returns early when text does not fit. Writes are
//! truncated, positional requests outside the content return an empty string,
//! and each value remembers what happened in a sticky [`ErrorFlags`] set.
//!
//! ## Features
//!
//! - **No heap allocations**: all data lives inside the value.
//! - **Always terminated**: one guard byte past the capacity is always zero.
//! - **Sticky errors**: [`ErrorFlags::OVERFLOW`] and [`ErrorFlags::OUT_OF_RANGE`]
//!   accumulate across copies, appends and substrings.
//! - **`no_std`** when the default `std` feature is disabled.
//!
//! ## Cargo Features
//!
//! - `std` *(default)*: `String` conversions.
//! - `serde` *(requires `std`)*: serialization and JSON helpers.
//! - `log`: traces every raised error bit through the `log` crate.
//!
//! ## Example
//!
//! ```rust
//! use boundedstr::*;
//!
//! let mut s: BoundedStr<5> = BoundedStr::from_str("abc");
//! assert!(s.error().is_empty());
//!
//! s += "defgh";
//! assert_eq!(s, "abcde");
//! assert!(s.error().contains(ErrorFlags::OVERFLOW));
//!
//! assert_eq!(s.find("cd"), 2);
//! assert_eq!(s.index_of("zz"), -1);
//! ```

#[macro_use]
mod macros;


#[cfg(feature = "std")]
mod std_only;

#[cfg(feature = "serde")]
mod serde;

mod display;
mod error;
mod num;
mod ops;
mod search;

pub use error::{Error, ErrorFlags};
pub use itoa::Integer;
pub use search::Position;

use core::{
    convert::Infallible,
    ffi::CStr,
    ops::Deref,
    slice,
    str::{FromStr, Utf8Error},
};

/// Returns `bytes` up to, not including, the first NUL byte.
pub(crate) fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// A fixed-capacity, null-terminated byte string.
///
/// `BoundedStr<CAP>` holds up to `CAP` bytes of content plus a terminator that
/// is always zero. Content ends at the first zero byte, the same way a C string
/// does.
///
/// # Usage
///
/// ```rust
/// use boundedstr::*;
/// let mut s: BoundedStr<16> = BoundedStr::new();
/// s.push_str("Rust");
/// s.push(b'!');
/// assert_eq!(s, "Rust!");
/// assert_eq!(s.as_bytes_with_nul(), b"Rust!\0");
/// ```
///
/// # Capacity and Truncation
///
/// Text that does not fit is cut at the capacity and
/// [`ErrorFlags::OVERFLOW`] is set. The model is byte oriented, so a
/// multi-byte UTF-8 character can be split by truncation.
///
/// # Error Flags
///
/// Errors are never cleared behind the caller's back. Cloning, appending and
/// taking substrings carry the source's bits forward; only a full replacement
/// ([`assign`](Self::assign), [`clear`](Self::clear), fresh construction)
/// starts over. Comparisons ignore the flags entirely.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct BoundedStr<const CAP: usize> {
    buffer: [u8; CAP],
    // Must directly follow `buffer`; see `as_bytes_with_nul`.
    terminator: u8,
    error: ErrorFlags,
}

impl<const CAP: usize> BoundedStr<CAP> {
    /// Maximum number of content bytes.
    pub const CAPACITY: usize = CAP;

    /// Search result meaning "not found".
    pub const NPOS: Position = Position::NPOS;

    /// Creates an empty `BoundedStr` with no errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s: BoundedStr<10> = BoundedStr::new();
    /// assert_eq!(s.len(), 0);
    /// assert_eq!(s.capacity(), 10);
    /// ```
    pub const fn new() -> Self {
        Self {
            buffer: [0; CAP],
            terminator: 0,
            error: ErrorFlags::empty(),
        }
    }

    /// Constructs a `BoundedStr` from bytes, read up to the first NUL.
    ///
    /// Input longer than `CAP` is truncated and sets [`ErrorFlags::OVERFLOW`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = BoundedStr::<8>::from_bytes(b"abc\0def");
    /// assert_eq!(s, "abc");
    /// assert!(s.error().is_empty());
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut result = Self::new();
        result.write_at(0, bytes);
        result
    }

    /// Constructs a `BoundedStr` from a string slice.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s: BoundedStr<5> = BoundedStr::from_str("Hello, world!");
    /// assert_eq!(s, "Hello"); // Truncated
    /// assert_eq!(s.error(), ErrorFlags::OVERFLOW);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// Constructs a single-character `BoundedStr`.
    ///
    /// With `CAP == 0` nothing is stored and [`ErrorFlags::OVERFLOW`] is set.
    pub fn from_byte(ch: u8) -> Self {
        let mut result = Self::new();
        result.push(ch);
        result
    }

    /// Converts from a string of another capacity.
    ///
    /// The source's error bits are inherited, and [`ErrorFlags::OVERFLOW`] is
    /// added if its content does not fit `CAP`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let wide = BoundedStr::<10>::from_str("abcdef");
    /// let narrow = BoundedStr::<4>::from_bounded(&wide);
    /// assert_eq!(narrow, "abcd");
    /// assert!(narrow.error().contains(ErrorFlags::OVERFLOW));
    /// ```
    pub fn from_bounded<const M: usize>(other: &BoundedStr<M>) -> Self {
        let mut result = Self::from_bytes(other.as_bytes());
        result.error |= other.error;
        result
    }

    /// Adopts a raw buffer. Content runs up to the first zero byte.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let buf = *b"Hello\0\0\0\0\0";
    /// let s = BoundedStr::<10>::from_raw_buffer(buf);
    /// assert_eq!(s, "Hello");
    /// ```
    pub const fn from_raw_buffer(buffer: [u8; CAP]) -> Self {
        Self {
            buffer,
            terminator: 0,
            error: ErrorFlags::empty(),
        }
    }

    /// Consumes the `BoundedStr` and returns its content cells.
    ///
    /// Cells after the content are zero unless they were written through
    /// indexing.
    pub const fn into_raw_buffer(self) -> [u8; CAP] {
        self.buffer
    }

    /// Copies `src` (up to its first NUL) into the buffer at `at`, cutting it
    /// at the capacity, and zeroes everything after it.
    ///
    /// Returns the number of bytes written.
    fn write_at(&mut self, at: usize, src: &[u8]) -> usize {
        let src = until_nul(src);
        let count = src.len().min(CAP - at);
        self.buffer[at..at + count].copy_from_slice(&src[..count]);
        self.buffer[at + count..].fill(0);
        if count < src.len() {
            self.raise(ErrorFlags::OVERFLOW);
        }
        count
    }

    /// Records an error bit on this value.
    pub(crate) fn raise(&mut self, flag: ErrorFlags) {
        trace_error!("BoundedStr<{}>: raised {:?}", CAP, flag);
        self.error |= flag;
    }

    /// Merges error bits inherited from another value.
    pub(crate) fn inherit(&mut self, flags: ErrorFlags) {
        self.error |= flags;
    }

    /// Replaces the content with `bytes`, read up to the first NUL.
    ///
    /// The error flags are overwritten: afterwards they hold only
    /// [`ErrorFlags::OVERFLOW`] if this assignment was truncated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let mut s = BoundedStr::<3>::from_str("abcdef");
    /// assert!(!s.error().is_empty());
    /// s.assign_bytes(b"xy");
    /// assert_eq!(s, "xy");
    /// assert!(s.error().is_empty());
    /// ```
    pub fn assign_bytes(&mut self, bytes: &[u8]) {
        self.error = ErrorFlags::empty();
        self.write_at(0, bytes);
    }

    /// Replaces the content with a string slice. See [`assign_bytes`](Self::assign_bytes).
    pub fn assign(&mut self, s: &str) {
        self.assign_bytes(s.as_bytes());
    }

    /// Replaces the content with a single character.
    pub fn assign_byte(&mut self, ch: u8) {
        self.assign_bytes(&[ch]);
    }

    /// Empties the string and resets its error flags.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let mut s = boundedstr!("Clear me!", 4);
    /// s.clear();
    /// assert_eq!(s, "");
    /// assert!(s.error().is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.buffer.fill(0);
        self.error = ErrorFlags::empty();
    }

    /// Appends bytes, read up to the first NUL, truncating at the capacity.
    ///
    /// Sets [`ErrorFlags::OVERFLOW`] if any byte was dropped. Appending empty
    /// input never sets it, even to a full string.
    ///
    /// # Returns
    ///
    /// The number of bytes actually appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let mut s = BoundedStr::<10>::new();
    /// assert_eq!(s.push_bytes(b"hello"), 5);
    /// assert_eq!(s.push_bytes(b" world"), 5); // Only " worl" fits
    /// assert_eq!(s, "hello worl");
    /// ```
    pub fn push_bytes(&mut self, bytes: &[u8]) -> usize {
        let len = self.length();
        self.write_at(len, bytes)
    }

    /// Appends a string slice. See [`push_bytes`](Self::push_bytes).
    pub fn push_str(&mut self, s: &str) -> usize {
        self.push_bytes(s.as_bytes())
    }

    /// Appends one character.
    ///
    /// Returns `false` and sets [`ErrorFlags::OVERFLOW`] if the string is
    /// full. Pushing `0` changes nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let mut s = BoundedStr::<1>::new();
    /// assert!(s.push(b'A'));
    /// assert!(!s.push(b'B')); // No space
    /// assert_eq!(s.error(), ErrorFlags::OVERFLOW);
    /// ```
    pub fn push(&mut self, ch: u8) -> bool {
        ch == 0 || self.push_bytes(&[ch]) == 1
    }

    /// Appends another bounded string and inherits its error bits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let tail = BoundedStr::<2>::from_str("xyz"); // overflowed
    /// let mut s = BoundedStr::<8>::from_str("ab");
    /// s.push_bounded(&tail);
    /// assert_eq!(s, "abxy");
    /// assert!(s.error().contains(ErrorFlags::OVERFLOW));
    /// ```
    pub fn push_bounded<const M: usize>(&mut self, other: &BoundedStr<M>) -> usize {
        self.inherit(other.error);
        self.push_bytes(other.as_bytes())
    }

    /// Number of content bytes before the terminator.
    pub fn length(&self) -> usize {
        self.buffer.iter().position(|&b| b == 0).unwrap_or(CAP)
    }

    /// Same as [`length`](Self::length).
    pub fn len(&self) -> usize {
        self.length()
    }

    /// Whether the content is empty, that is cell 0 is the terminator.
    pub fn is_empty(&self) -> bool {
        self.buffer.first().map_or(true, |&b| b == 0)
    }

    /// Whether the content fills the whole capacity.
    pub fn is_full(&self) -> bool {
        self.length() == CAP
    }

    /// The capacity `CAP`.
    pub const fn max_size(&self) -> usize {
        CAP
    }

    /// The capacity `CAP`.
    pub const fn capacity(&self) -> usize {
        CAP
    }

    /// The accumulated error bits.
    pub const fn error(&self) -> ErrorFlags {
        self.error
    }

    /// Turns the error bits into a `Result`, reporting overflow first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// assert_eq!(BoundedStr::<3>::from_str("abc").check(), Ok(()));
    /// assert_eq!(BoundedStr::<2>::from_str("abc").check(), Err(Error::Overflow));
    /// ```
    pub fn check(&self) -> Result<(), Error> {
        match self.error.first_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// The content bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.length()]
    }

    /// The content bytes followed by the terminating zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = BoundedStr::<2>::from_str("hi");
    /// assert_eq!(s.as_bytes_with_nul(), b"hi\0");
    /// ```
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        let len = self.length();
        if len < CAP {
            return &self.buffer[..=len];
        }
        // SAFETY: with `#[repr(C)]`, `terminator` sits directly after `buffer`
        // at offset `CAP`, and both are plain bytes, so the first `CAP + 1`
        // bytes of `self` are initialized and contiguous.
        unsafe { slice::from_raw_parts((self as *const Self).cast::<u8>(), CAP + 1) }
    }

    /// Borrows the content as a C string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = boundedstr!("abc");
    /// assert_eq!(s.as_c_str(), c"abc");
    /// ```
    pub fn as_c_str(&self) -> &CStr {
        // SAFETY: `as_bytes_with_nul` ends at the first zero byte, so the
        // slice has exactly one NUL and it is the last byte.
        unsafe { CStr::from_bytes_with_nul_unchecked(self.as_bytes_with_nul()) }
    }

    /// Raw pointer to the first content byte. The bytes are null-terminated.
    pub fn as_ptr(&self) -> *const u8 {
        self.buffer.as_ptr()
    }

    /// The content as `&str`, if it is valid UTF-8.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// Removes leading ASCII spaces in place.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let mut s = boundedstr!("  pad ");
    /// s.trim_start();
    /// assert_eq!(s, "pad ");
    /// ```
    pub fn trim_start(&mut self) {
        let len = self.length();
        let skip = self.buffer[..len].iter().take_while(|&&b| b == b' ').count();
        if skip > 0 {
            self.buffer.copy_within(skip..len, 0);
            self.buffer[len - skip..].fill(0);
        }
    }

    /// Removes trailing ASCII spaces in place.
    pub fn trim_end(&mut self) {
        let len = self.length();
        let keep = self.buffer[..len]
            .iter()
            .rposition(|&b| b != b' ')
            .map_or(0, |last| last + 1);
        self.buffer[keep..].fill(0);
    }

    /// Removes leading and trailing ASCII spaces in place.
    ///
    /// A string of only spaces becomes empty. Error bits are untouched.
    pub fn trim(&mut self) {
        self.trim_start();
        self.trim_end();
    }

    /// Returns a trimmed copy, carrying this string's error bits.
    pub fn trimmed(&self) -> Self {
        let mut result = *self;
        result.trim();
        result
    }
}

impl<const CAP: usize> Default for BoundedStr<CAP> {
    /// Returns an empty `BoundedStr`.
    ///
    /// Equivalent to [`BoundedStr::new()`].
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> Deref for BoundedStr<CAP> {
    type Target = [u8];

    /// Gives slice access to the content:
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = boundedstr!("hello");
    /// assert!(s.starts_with(b"he"));
    /// assert!(s.is_ascii());
    /// ```
    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl<const CAP: usize> AsRef<[u8]> for BoundedStr<CAP> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const CAP: usize> From<&str> for BoundedStr<CAP> {
    fn from(value: &str) -> Self {
        Self::from_str(value)
    }
}

impl<const CAP: usize> From<&[u8]> for BoundedStr<CAP> {
    fn from(value: &[u8]) -> Self {
        Self::from_bytes(value)
    }
}

impl<const CAP: usize> From<&CStr> for BoundedStr<CAP> {
    fn from(value: &CStr) -> Self {
        Self::from_bytes(value.to_bytes())
    }
}

impl<const CAP: usize> From<u8> for BoundedStr<CAP> {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl<const CAP: usize> From<char> for BoundedStr<CAP> {
    /// Encodes the character as UTF-8 and stores it like text.
    fn from(value: char) -> Self {
        let mut encoded = [0; 4];
        Self::from_str(value.encode_utf8(&mut encoded))
    }
}

impl<const CAP: usize> FromStr for BoundedStr<CAP> {
    type Err = Infallible;

    /// Never fails; check [`BoundedStr::error`] for truncation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_bytes(s.as_bytes()))
    }
}
