//! Operator surface: concatenation, comparison, hashing and indexing.
//!
//! Comparisons look at content only; two strings with the same bytes but
//! different error histories are equal.

use crate::BoundedStr;
use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Index, IndexMut},
};

impl<const CAP: usize> AddAssign<&str> for BoundedStr<CAP> {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}

impl<const CAP: usize> AddAssign<&[u8]> for BoundedStr<CAP> {
    fn add_assign(&mut self, rhs: &[u8]) {
        self.push_bytes(rhs);
    }
}

impl<const CAP: usize> AddAssign<u8> for BoundedStr<CAP> {
    fn add_assign(&mut self, rhs: u8) {
        self.push(rhs);
    }
}

impl<const CAP: usize> AddAssign<char> for BoundedStr<CAP> {
    fn add_assign(&mut self, rhs: char) {
        let mut encoded = [0; 4];
        self.push_str(rhs.encode_utf8(&mut encoded));
    }
}

impl<const CAP: usize, const M: usize> AddAssign<&BoundedStr<M>> for BoundedStr<CAP> {
    fn add_assign(&mut self, rhs: &BoundedStr<M>) {
        self.push_bounded(rhs);
    }
}

impl<const CAP: usize, const M: usize> AddAssign<BoundedStr<M>> for BoundedStr<CAP> {
    fn add_assign(&mut self, rhs: BoundedStr<M>) {
        self.push_bounded(&rhs);
    }
}

impl<const CAP: usize, T> Add<T> for BoundedStr<CAP>
where
    BoundedStr<CAP>: AddAssign<T>,
{
    type Output = Self;

    /// Concatenates into a copy; same truncation and error rules as `+=`.
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let a = boundedstr!("ab", 4);
    /// let b = a + "cd" + b'e';
    /// assert_eq!(b, "abcd");
    /// assert_eq!(a, "ab");
    /// assert!(b.error().contains(ErrorFlags::OVERFLOW));
    /// ```
    fn add(mut self, rhs: T) -> Self::Output {
        self += rhs;
        self
    }
}

impl<const A: usize, const B: usize> PartialEq<BoundedStr<B>> for BoundedStr<A> {
    /// Compares two `BoundedStr`s by content, ignoring error bits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let a = boundedstr!("test", 4);
    /// let b = boundedstr!("testing", 4); // overflowed
    /// assert_eq!(a, b);
    /// ```
    fn eq(&self, other: &BoundedStr<B>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const CAP: usize> Eq for BoundedStr<CAP> {}

impl<const A: usize, const B: usize> PartialOrd<BoundedStr<B>> for BoundedStr<A> {
    fn partial_cmp(&self, other: &BoundedStr<B>) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_bytes()))
    }
}

impl<const CAP: usize> Ord for BoundedStr<CAP> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl<const CAP: usize> Hash for BoundedStr<CAP> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl<const CAP: usize> PartialEq<[u8]> for BoundedStr<CAP> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const CAP: usize> PartialEq<&[u8]> for BoundedStr<CAP> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const CAP: usize> PartialEq<BoundedStr<CAP>> for [u8] {
    fn eq(&self, other: &BoundedStr<CAP>) -> bool {
        self == other.as_bytes()
    }
}

impl<const CAP: usize> PartialEq<BoundedStr<CAP>> for &[u8] {
    fn eq(&self, other: &BoundedStr<CAP>) -> bool {
        *self == other.as_bytes()
    }
}

impl<const CAP: usize> PartialOrd<[u8]> for BoundedStr<CAP> {
    fn partial_cmp(&self, other: &[u8]) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other))
    }
}

impl<const CAP: usize> PartialOrd<&[u8]> for BoundedStr<CAP> {
    fn partial_cmp(&self, other: &&[u8]) -> Option<Ordering> {
        Some(self.as_bytes().cmp(*other))
    }
}

impl<const CAP: usize> PartialEq<str> for BoundedStr<CAP> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const CAP: usize> PartialEq<&str> for BoundedStr<CAP> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const CAP: usize> PartialEq<BoundedStr<CAP>> for str {
    fn eq(&self, other: &BoundedStr<CAP>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const CAP: usize> PartialEq<BoundedStr<CAP>> for &str {
    fn eq(&self, other: &BoundedStr<CAP>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const CAP: usize> PartialOrd<str> for BoundedStr<CAP> {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_bytes()))
    }
}

impl<const CAP: usize> PartialOrd<&str> for BoundedStr<CAP> {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_bytes()))
    }
}

impl<const CAP: usize> Index<usize> for BoundedStr<CAP> {
    type Output = u8;

    /// Reads cell `index`, where cell `CAP` is the terminator.
    ///
    /// # Panics
    ///
    /// If `index > CAP`.
    fn index(&self, index: usize) -> &u8 {
        if index == CAP {
            return &self.terminator;
        }
        &self.buffer[index]
    }
}

impl<const CAP: usize> IndexMut<usize> for BoundedStr<CAP> {
    /// Writes content cell `index`. Storing `0` ends the content there.
    ///
    /// # Panics
    ///
    /// If `index >= CAP`; the terminator cannot be written.
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.buffer[index]
    }
}
