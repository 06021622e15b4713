//! Payload compression codecs understood by the native protocol.
//!
//! Only the *name* of a codec lives here; the encode/decode implementations
//! belong to the frame pipeline. Each [`Compression`] carries the identifier
//! offered to the remote endpoint during options negotiation.
//!
//! # Example
//! ```rust
//! use protocol_options::Compression;
//!
//! let codec: Compression = "snappy".parse().unwrap();
//! assert_eq!(codec, Compression::Snappy);
//! assert_eq!(codec.protocol_name(), "snappy");
//! assert_eq!(Compression::None.to_string(), "");
//! ```
use std::{fmt, str::FromStr};

use crate::options::OptionsError;

/// Compression supported by the native binary protocol.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// No compression
    #[default]
    None,
    /// Snappy compression
    Snappy,
    /// LZ4 compression
    Lz4,
}

impl Compression {
    pub const ALL: [Compression; 3] = [Compression::None, Compression::Snappy, Compression::Lz4];

    /// Name used for this codec during options negotiation. Empty for `None`.
    pub fn protocol_name(&self) -> &'static str {
        match self {
            Compression::None => "",
            Compression::Snappy => "snappy",
            Compression::Lz4 => "lz4",
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.protocol_name())
    }
}

impl FromStr for Compression {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(Compression::None),
            "snappy" => Ok(Compression::Snappy),
            "lz4" => Ok(Compression::Lz4),
            _ => Err(OptionsError::InvalidCompression(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Compression {
    type Error = OptionsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(Compression::None),
            0x1 => Ok(Compression::Snappy),
            0x2 => Ok(Compression::Lz4),
            v => Err(OptionsError::InvalidCompression(format!("discriminant {v:#x}"))),
        }
    }
}

impl From<Compression> for u8 {
    fn from(value: Compression) -> Self {
        match value {
            Compression::None => 0x0,
            Compression::Snappy => 0x1,
            Compression::Lz4 => 0x2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_names() {
        let inputs = vec![
            (Compression::None, ""),
            (Compression::Snappy, "snappy"),
            (Compression::Lz4, "lz4"),
        ];

        for (codec, expected) in inputs {
            assert_eq!(codec.protocol_name(), expected);
            assert_eq!(codec.to_string(), expected);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Compression::Snappy, "SNAPPY".parse().unwrap());
        assert_eq!(Compression::Lz4, " Lz4 ".parse().unwrap());
        assert_eq!(Compression::None, "none".parse().unwrap());
        assert_eq!(Compression::None, "".parse().unwrap());
    }

    #[test]
    #[should_panic(expected = "InvalidCompression")]
    fn parse_unknown_codec() {
        let _: Compression = "gzip".parse().unwrap();
    }

    #[test]
    fn discriminants_are_stable() {
        for codec in Compression::ALL {
            let byte: u8 = codec.into();
            assert_eq!(Compression::try_from(byte).unwrap(), codec);
        }
        assert_eq!(u8::from(Compression::Snappy), 0x1);
    }

    #[test]
    fn unknown_discriminant() {
        let err = Compression::try_from(0x7).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidCompression(_)));
        assert_eq!(err.to_string(), "invalid compression 'discriminant 0x7'");
    }
}
