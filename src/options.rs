//! Native protocol connection options.
//!
//! This module defines [`ProtocolOptions`], the registry of negotiable parameters consulted
//! every time a new connection is established: the port to dial, the transport security
//! material to wrap the socket with, and the payload compression to offer during options
//! negotiation.
//!
//! # Overview
//!
//! The port and [`SslOptions`] are fixed when the registry is built and never change
//! afterwards, so they are shared without any synchronisation once the registry sits behind
//! an [`Arc`]. The compression selection may be swapped at any time by administrative code
//! while connection threads keep reading it; it is held in a single atomic so readers never
//! block and never observe a value that was not written.
//!
//! A change of compression only affects connections opened after the call returns. Existing
//! connections keep whatever codec they negotiated.
//!
//! # Example
//! ```rust
//! use protocol_options::{Compression, ProtocolOptions, SslOptions};
//!
//! let options = ProtocolOptions::new(9142, Some(SslOptions::default())).unwrap();
//! options.set_compression(Compression::Snappy);
//!
//! assert_eq!(options.port(), 9142);
//! assert_eq!(options.compression(), Compression::Snappy);
//! assert_eq!(options.ssl_options(), Some(&SslOptions::default()));
//! ```
//!
//! # See Also
//! - [`cluster`](crate::cluster): The manager that registers with and consumes these options.
use std::{
    fmt,
    sync::{
        Arc, PoisonError, RwLock, Weak,
        atomic::{AtomicU8, Ordering},
    },
};

use log::{debug, info};
use thiserror::Error;

use crate::{Compression, SslOptions, cluster::Manager};

/// The default port for the native binary protocol.
pub const DEFAULT_PORT: u16 = 9042;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("invalid port {0}, expected a value between 1 and 65535")]
    InvalidPort(u32),

    #[error("invalid compression '{0}'")]
    InvalidCompression(String),
}

/// Options of the native binary protocol.
pub struct ProtocolOptions {
    port: u16,
    ssl: Option<SslOptions>,
    compression: AtomicU8,
    manager: RwLock<Option<Weak<Manager>>>,
}

impl ProtocolOptions {
    /// Creates options for `port`, wrapping connections with `ssl` when provided.
    ///
    /// Compression starts out as [`Compression::None`].
    pub fn new(port: u16, ssl: Option<SslOptions>) -> Result<Self, OptionsError> {
        if port == 0 {
            return Err(OptionsError::InvalidPort(port.into()));
        }
        Ok(Self::build(port, ssl))
    }

    fn build(port: u16, ssl: Option<SslOptions>) -> Self {
        Self {
            port,
            ssl,
            compression: AtomicU8::new(Compression::None.into()),
            manager: RwLock::new(None),
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Transport security material, `None` when connections are not encrypted.
    pub fn ssl_options(&self) -> Option<&SslOptions> {
        self.ssl.as_ref()
    }

    pub fn compression(&self) -> Compression {
        match Compression::try_from(self.compression.load(Ordering::Acquire)) {
            Ok(compression) => compression,
            Err(e) => unreachable!("{e}: only enumeration members are stored"),
        }
    }

    /// Sets the compression offered by connections created from now on.
    pub fn set_compression(&self, compression: Compression) -> &Self {
        self.compression.store(compression.into(), Ordering::Release);
        debug!("compression set to {compression:?}");
        self
    }

    /// Sets the compression from a codec name such as `snappy` or `none`.
    ///
    /// Unknown names are rejected; the current selection is left untouched.
    pub fn set_compression_name(&self, name: &str) -> Result<&Self, OptionsError> {
        let compression = name.parse()?;
        Ok(self.set_compression(compression))
    }

    /// Binds these options to the manager owning the cluster lifecycle. The last
    /// registration wins.
    pub(crate) fn register(&self, manager: Weak<Manager>) {
        let mut slot = self.manager.write().unwrap_or_else(PoisonError::into_inner);
        if slot.replace(manager).is_some() {
            debug!("replacing previously registered manager");
        }
        info!("protocol options on port {} registered", self.port);
    }

    /// Currently registered manager, if any is registered and still alive.
    pub(crate) fn manager(&self) -> Option<Arc<Manager>> {
        self.manager
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade)
    }
}

impl Default for ProtocolOptions {
    /// Uses [`DEFAULT_PORT`] without transport security.
    fn default() -> Self {
        Self::build(DEFAULT_PORT, None)
    }
}

impl fmt::Debug for ProtocolOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtocolOptions")
            .field("port", &self.port)
            .field("ssl", &self.ssl)
            .field("compression", &self.compression())
            .field("registered", &self.manager().is_some())
            .finish()
    }
}
