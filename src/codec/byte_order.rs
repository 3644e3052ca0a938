//! Byte-order selection for numeric attribute encoding
//!
//! DICOM transfer syntaxes fix the byte order of multi-byte numeric values.
//! Callers tag each byte sequence with one of the two recognized order
//! tokens; any other token is rejected before any byte is touched.

use crate::error::{DicomWebError, Result};
use std::fmt;
use std::str::FromStr;

/// Wire token for [`ByteOrder::LittleEndian`]
pub const LITTLE_ENDIAN_TOKEN: &str = "LITTLE_ENDIAN";

/// Wire token for [`ByteOrder::BigEndian`]
pub const BIG_ENDIAN_TOKEN: &str = "BIG_ENDIAN";

/// Arrangement of the bytes composing a multi-byte numeric value
///
/// Byte order determines only layout and interpretation, never a value's sign
/// or magnitude beyond standard two's-complement / IEEE-754 rules.
///
/// # Examples
///
/// ```
/// use dicomweb_rust::codec::ByteOrder;
///
/// let order = ByteOrder::from_token("LITTLE_ENDIAN").unwrap();
/// assert_eq!(order, ByteOrder::LittleEndian);
/// assert!(ByteOrder::from_token("MIDDLE_ENDIAN").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first
    LittleEndian,
    /// Most-significant byte first
    BigEndian,
}

impl ByteOrder {
    /// Parse a caller-supplied byte-order token
    ///
    /// # Errors
    ///
    /// - [`DicomWebError::InvalidByteOrder`] - the token is neither
    ///   `"LITTLE_ENDIAN"` nor `"BIG_ENDIAN"`
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            LITTLE_ENDIAN_TOKEN => Ok(ByteOrder::LittleEndian),
            BIG_ENDIAN_TOKEN => Ok(ByteOrder::BigEndian),
            other => Err(DicomWebError::InvalidByteOrder(other.to_string())),
        }
    }

    /// Get the wire token for this byte order
    pub fn token(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => LITTLE_ENDIAN_TOKEN,
            ByteOrder::BigEndian => BIG_ENDIAN_TOKEN,
        }
    }
}

impl FromStr for ByteOrder {
    type Err = DicomWebError;

    fn from_str(s: &str) -> Result<Self> {
        ByteOrder::from_token(s)
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_little_endian() {
        let order = ByteOrder::from_token("LITTLE_ENDIAN").unwrap();
        assert_eq!(order, ByteOrder::LittleEndian);
    }

    #[test]
    fn test_from_token_big_endian() {
        let order = ByteOrder::from_token("BIG_ENDIAN").unwrap();
        assert_eq!(order, ByteOrder::BigEndian);
    }

    #[test]
    fn test_from_token_invalid() {
        let result = ByteOrder::from_token("MIDDLE_ENDIAN");
        assert!(matches!(result, Err(DicomWebError::InvalidByteOrder(_))));
    }

    #[test]
    fn test_from_token_case_sensitive() {
        // Tokens are exact; lowercase is not a recognized order
        assert!(ByteOrder::from_token("little_endian").is_err());
    }

    #[test]
    fn test_token_roundtrip() {
        for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            assert_eq!(ByteOrder::from_token(order.token()).unwrap(), order);
        }
    }

    #[test]
    fn test_from_str() {
        let order: ByteOrder = "BIG_ENDIAN".parse().unwrap();
        assert_eq!(order, ByteOrder::BigEndian);
    }

    #[test]
    fn test_display() {
        assert_eq!(ByteOrder::LittleEndian.to_string(), "LITTLE_ENDIAN");
        assert_eq!(ByteOrder::BigEndian.to_string(), "BIG_ENDIAN");
    }
}
