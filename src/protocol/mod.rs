//! Options negotiation payloads.
//!
//! When a connection is established the client tells the remote endpoint which protocol
//! features it wants through a string map. This module builds that map from the
//! [`ProtocolOptions`](crate::ProtocolOptions) in effect for the connection, most notably the
//! `COMPRESSION` entry carrying the codec's wire name.
//!
//! # Binary Format
//!
//! The option map is encoded with bincode:
//!
//! - All integers are big-endian and fixed width.
//! - Entries are written in key order, so identical offers always produce identical bytes.
//! - Decoding refuses to claim more than [`MAX_STARTUP_SIZE`] bytes.
//!
//! Frame headers, stream ids and body compression are applied by the connection layer.
//!
//! # See Also
//!
//! - [`cluster`](crate::cluster): Builds a [`Startup`] for every new connection.
mod startup;

pub use startup::{
    COMPRESSION_KEY, CQL_VERSION, CQL_VERSION_KEY, MAX_STARTUP_SIZE, Startup, StartupError,
};
