use super::BoundedStr;

impl<const CAP: usize> From<String> for BoundedStr<CAP> {
    /// Converts a `String` into a `BoundedStr`, truncating if necessary.
    ///
    /// # Note
    ///
    /// This method is provided for completeness, but prefer using
    /// [`BoundedStr::from_str`] as `String` can be coerced to `&str`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let string = String::from("Hello world");
    /// let s: BoundedStr<5> = BoundedStr::from(string);
    /// assert_eq!(s, "Hello");
    /// ```
    fn from(value: String) -> Self {
        Self::from_str(&value)
    }
}

impl<const CAP: usize> From<BoundedStr<CAP>> for String {
    /// Converts a `BoundedStr` into a `String`.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let bounded = boundedstr!("Rust", 10);
    /// let string: String = String::from(bounded);
    /// assert_eq!(string, "Rust");
    /// ```
    fn from(value: BoundedStr<CAP>) -> Self {
        String::from_utf8_lossy(value.as_bytes()).into_owned()
    }
}

#[cfg(feature = "serde")]
impl<const CAP: usize> BoundedStr<CAP> {
    /// Serializes the content as a JSON string. Error bits are not included.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a JSON string.
    ///
    /// Fails if the text is longer than `CAP` bytes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boundedstr::*;
    /// let s = BoundedStr::<8>::from_json("\"id-42\"").unwrap();
    /// assert_eq!(s, "id-42");
    /// assert!(BoundedStr::<2>::from_json("\"id-42\"").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
