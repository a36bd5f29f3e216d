//! `serde` support for [`BoundedStr`](crate::BoundedStr).
//!
//! - **Serialize**: as a string when the content is valid UTF-8, as bytes
//!   otherwise. Error bits are not part of the serialized form.
//! - **Deserialize**: from a string, bytes, or a sequence of bytes (how
//!   self-describing formats such as JSON write bytes) of at most `CAP`
//!   bytes. Longer input is an error rather than a silent truncation.

use crate::{until_nul, BoundedStr};
use core::fmt;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl<const CAP: usize> Serialize for BoundedStr<CAP> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self.to_str() {
            Ok(text) => s.serialize_str(text),
            Err(_) => s.serialize_bytes(self.as_bytes()),
        }
    }
}

struct BoundedStrVisitor<const CAP: usize>;

impl<'de, const CAP: usize> de::Visitor<'de> for BoundedStrVisitor<CAP> {
    type Value = BoundedStr<CAP>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a string or byte sequence of at most {} bytes", CAP)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        self.visit_bytes(v.as_bytes())
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        if until_nul(v).len() > CAP {
            return Err(E::custom(format_args!("string too long (capacity {CAP})")));
        }
        Ok(BoundedStr::from_bytes(v))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = BoundedStr::<CAP>::new();
        let mut ended = false;
        while let Some(byte) = seq.next_element::<u8>()? {
            // Content stops at the first NUL; the rest is read and dropped.
            ended |= byte == 0;
            if !ended && !out.push(byte) {
                return Err(de::Error::custom(format_args!("string too long (capacity {CAP})")));
            }
        }
        Ok(out)
    }
}

impl<'de, const CAP: usize> Deserialize<'de> for BoundedStr<CAP> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(BoundedStrVisitor::<CAP>)
    }
}
