//! Hex payload parsing and rendering.
//!
//! Operators hand this program text like `"01 15 12 DE AD BE EF"`. This
//! module turns that text into the byte sequence to put on the wire, and
//! renders byte sequences back into the same notation for logging.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An ordered byte sequence parsed from operator-supplied hex text.
///
/// Parsing removes space characters, requires an even number of remaining
/// digits, and decodes the digits pairwise, case-insensitively. The empty
/// string parses to an empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexPayload(Vec<u8>);

impl HexPayload {
    /// The raw bytes, in wire order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for HexPayload {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let digits = s.replace(' ', "");
        if digits.len() % 2 != 0 {
            return Err(Error::InvalidInput("odd-length hex string".into()));
        }

        let bytes = hex::decode(&digits).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => Error::InvalidInput(
                format!("malformed hex digit '{}' at offset {}", c, index),
            ),
            hex::FromHexError::OddLength => {
                Error::InvalidInput("odd-length hex string".into())
            }
            other => Error::InvalidInput(other.to_string()),
        })?;

        Ok(HexPayload(bytes))
    }
}

impl fmt::Display for HexPayload {
    /// Lowercase, space-separated digit pairs: `01 15 12 de ad be ef`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
