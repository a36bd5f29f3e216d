//! Searching and slicing.
//!
//! Two result conventions coexist on purpose. `find`/`rfind` return an
//! unsigned [`Position`] that is [`Position::NPOS`] when nothing matched,
//! while `index_of`/`last_index_of` return a signed `isize` that is `-1`.

use crate::{until_nul, BoundedStr, ErrorFlags};
use core::fmt;

/// An unsigned search result with an explicit "not found" value.
///
/// # Example
///
/// ```rust
/// use boundedstr::*;
/// let s = boundedstr!("abcabc");
/// assert_eq!(s.find("c"), 2);
/// assert_eq!(s.find("c").get(), Some(2));
/// assert!(s.find("z").is_npos());
/// assert_eq!(s.find("z"), BoundedStr::<6>::NPOS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// "Not found". Larger than any valid position.
    pub const NPOS: Position = Position(usize::MAX);

    /// Wraps a found index. `Position::new(usize::MAX)` is [`NPOS`](Self::NPOS).
    pub const fn new(index: usize) -> Self {
        Position(index)
    }

    /// Whether this is the "not found" value.
    pub const fn is_npos(self) -> bool {
        self.0 == usize::MAX
    }

    /// The raw value, `usize::MAX` for [`NPOS`](Self::NPOS).
    pub const fn as_usize(self) -> usize {
        self.0
    }

    /// `None` for [`NPOS`](Self::NPOS), the index otherwise.
    pub const fn get(self) -> Option<usize> {
        if self.is_npos() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl From<Option<usize>> for Position {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::NPOS, Position)
    }
}

impl From<Position> for Option<usize> {
    fn from(value: Position) -> Self {
        value.get()
    }
}

impl PartialEq<usize> for Position {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(index) => fmt::Display::fmt(&index, f),
            None => f.write_str("npos"),
        }
    }
}

// First match of `needle` starting at or after `from`.
fn find_in(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

// Last match of `needle` starting at or after `from`.
fn rfind_in(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(haystack.len());
    }
    haystack[from..]
        .windows(needle.len())
        .rposition(|window| window == needle)
        .map(|offset| from + offset)
}

fn signed(found: Option<usize>) -> isize {
    found.map_or(-1, |index| index as isize)
}

impl<const CAP: usize> BoundedStr<CAP> {
    /// Position of the first occurrence of `pattern`.
    ///
    /// The pattern is anything byte-like (`&str`, `b"..."`, another
    /// `BoundedStr`) and is read up to its first NUL. An empty pattern
    /// matches at the start.
    pub fn find<P: AsRef<[u8]>>(&self, pattern: P) -> Position {
        self.find_from(pattern, 0)
    }

    /// Position of the first occurrence of `pattern` at or after `pos`.
    ///
    /// Returns [`Position::NPOS`] when there is none, including when `pos` is
    /// past the end of the content.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = boundedstr!("one two one");
    /// assert_eq!(s.find_from("one", 1), 8);
    /// assert!(s.find_from("one", 20).is_npos());
    /// ```
    pub fn find_from<P: AsRef<[u8]>>(&self, pattern: P, pos: usize) -> Position {
        find_in(self.as_bytes(), until_nul(pattern.as_ref()), pos).into()
    }

    /// Position of the last occurrence of `pattern`.
    pub fn rfind<P: AsRef<[u8]>>(&self, pattern: P) -> Position {
        self.rfind_from(pattern, 0)
    }

    /// Position of the last occurrence of `pattern` that starts at or after
    /// `pos`. Overlapping occurrences count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = boundedstr!("aaaa");
    /// assert_eq!(s.rfind("aa"), 2);
    /// assert!(s.rfind_from("aa", 3).is_npos());
    /// ```
    pub fn rfind_from<P: AsRef<[u8]>>(&self, pattern: P, pos: usize) -> Position {
        rfind_in(self.as_bytes(), until_nul(pattern.as_ref()), pos).into()
    }

    /// Like [`find`](Self::find), but `-1` when not found.
    pub fn index_of<P: AsRef<[u8]>>(&self, pattern: P) -> isize {
        self.index_of_from(pattern, 0)
    }

    /// Like [`find_from`](Self::find_from), but `-1` when not found.
    pub fn index_of_from<P: AsRef<[u8]>>(&self, pattern: P, pos: usize) -> isize {
        signed(find_in(self.as_bytes(), until_nul(pattern.as_ref()), pos))
    }

    /// Like [`rfind`](Self::rfind), but `-1` when not found.
    pub fn last_index_of<P: AsRef<[u8]>>(&self, pattern: P) -> isize {
        self.last_index_of_from(pattern, 0)
    }

    /// Like [`rfind_from`](Self::rfind_from), but `-1` when not found.
    pub fn last_index_of_from<P: AsRef<[u8]>>(&self, pattern: P, pos: usize) -> isize {
        signed(rfind_in(self.as_bytes(), until_nul(pattern.as_ref()), pos))
    }

    /// Up to `len` bytes starting at `pos`.
    ///
    /// The result inherits this string's error bits. A `pos` equal to the
    /// length yields an empty string; a `pos` past it yields an empty string
    /// with [`ErrorFlags::OUT_OF_RANGE`] set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = boundedstr!("abcdef");
    /// assert_eq!(s.substr(2, 3), "cde");
    /// assert_eq!(s.substr(4, 100), "ef");
    /// assert!(s.substr(6, 1).error().is_empty());
    /// assert_eq!(s.substr(7, 1).error(), ErrorFlags::OUT_OF_RANGE);
    /// ```
    pub fn substr(&self, pos: usize, len: usize) -> Self {
        let mut result = Self::new();
        result.inherit(self.error);
        let content = self.as_bytes();
        if pos > content.len() {
            result.raise(ErrorFlags::OUT_OF_RANGE);
            return result;
        }
        let end = pos + len.min(content.len() - pos);
        result.write_at(0, &content[pos..end]);
        result
    }

    /// Everything from `pos` to the end. See [`substr`](Self::substr).
    pub fn substr_from(&self, pos: usize) -> Self {
        self.substr(pos, CAP)
    }

    /// The content in `[from, to)`, with `to` clamped to the length.
    ///
    /// The result inherits this string's error bits, and gets
    /// [`ErrorFlags::OUT_OF_RANGE`] (with empty content) when `from` is not a
    /// position inside the content or `to < from`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = boundedstr!("abcdef");
    /// assert_eq!(s.substring(1, 4), "bcd");
    /// assert_eq!(s.substring(3, 3), "");
    /// assert_eq!(s.substring(4, 2).error(), ErrorFlags::OUT_OF_RANGE);
    /// ```
    pub fn substring(&self, from: usize, to: usize) -> Self {
        let mut result = Self::new();
        result.inherit(self.error);
        let content = self.as_bytes();
        if from >= content.len() || to < from {
            result.raise(ErrorFlags::OUT_OF_RANGE);
            return result;
        }
        result.write_at(0, &content[from..to.min(content.len())]);
        result
    }

    /// The content from `from` to the end. See [`substring`](Self::substring).
    pub fn substring_from(&self, from: usize) -> Self {
        self.substring(from, CAP)
    }
}
