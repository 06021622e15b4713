use std::{
    collections::BTreeMap,
    io::{Cursor, Read, Write},
};

use bincode::{
    Decode, Encode,
    config::{BigEndian, Configuration, Fixint, Limit},
    decode_from_std_read, encode_into_std_write,
};
use thiserror::Error;

use crate::{Compression, OptionsError};

pub const CQL_VERSION: &str = "3.0.0";
pub const CQL_VERSION_KEY: &str = "CQL_VERSION";
pub const COMPRESSION_KEY: &str = "COMPRESSION";

/// Upper bound on the bytes a single decoded startup may claim.
pub const MAX_STARTUP_SIZE: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to encode startup: {0}")]
    Serialize(#[from] bincode::error::EncodeError),
    #[error("failed to decode startup: {0}")]
    Deserialize(#[from] bincode::error::DecodeError),
    #[error("invalid startup option: {0}")]
    Options(#[from] OptionsError),
}

/// Options offered to the remote endpoint when a connection starts.
#[derive(Debug, Clone, Encode, Decode, PartialEq, Eq)]
pub struct Startup {
    options: BTreeMap<String, String>,
}

fn config() -> Configuration<BigEndian, Fixint, Limit<MAX_STARTUP_SIZE>> {
    bincode::config::standard()
        .with_big_endian()
        .with_fixed_int_encoding()
        .with_limit::<MAX_STARTUP_SIZE>()
}

impl Startup {
    pub fn new(compression: Compression) -> Self {
        let mut options = BTreeMap::new();
        options.insert(CQL_VERSION_KEY.to_string(), CQL_VERSION.to_string());
        if compression != Compression::None {
            options.insert(
                COMPRESSION_KEY.to_string(),
                compression.protocol_name().to_string(),
            );
        }
        Self { options }
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Codec requested by this offer.
    pub fn compression(&self) -> Result<Compression, StartupError> {
        match self.options.get(COMPRESSION_KEY) {
            Some(name) => Ok(name.parse()?),
            None => Ok(Compression::None),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, StartupError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, StartupError> {
        Self::read_from(&mut Cursor::new(bytes))
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<usize, StartupError> {
        Ok(encode_into_std_write(self, writer, config())?)
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, StartupError> {
        Ok(decode_from_std_read(reader, config())?)
    }
}
