#[macro_export]
/// Creates a `BoundedStr` containing the string literal.
///
/// `boundedstr!` accepts an optional capacity. Without one, the capacity is
/// exactly the byte length of the literal.
///
/// # Example
///
/// ```rust
/// use boundedstr::{boundedstr, ErrorFlags};
/// let exact = boundedstr!("Hello, world");
/// let roomy = boundedstr!("Hello, world", 20);
/// let tight = boundedstr!("Hello, world", 5);
///
/// assert_eq!(exact.capacity(), 12);
/// assert_eq!(roomy.capacity(), 20);
/// assert_eq!(tight, "Hello"); // Truncated
/// assert!(tight.error().contains(ErrorFlags::OVERFLOW));
/// ```
macro_rules! boundedstr {
    ($s:expr) => {{
        const LEN: usize = $s.len();
        $crate::BoundedStr::<{ LEN }>::from_str($s)
    }};
    ($s:expr, $cap:expr) => {{
        $crate::BoundedStr::<{ $cap }>::from_str($s)
    }};
}

// Raised error bits are traced when the `log` feature is on.
#[cfg(feature = "log")]
macro_rules! trace_error {
    ($($arg:tt)+) => {
        ::log::trace!($($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace_error {
    ($($arg:tt)+) => {};
}
