//! Connection manager consuming [`ProtocolOptions`].
//!
//! The [`Manager`] owns the cluster lifecycle: it registers itself with the options at
//! startup and, for every new connection attempt, takes a [`ConnectionSettings`] snapshot
//! of the port, transport security and compression to use. Opening the socket and running
//! the handshake is left to the connection layer.
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use log::trace;

use crate::{Compression, ProtocolOptions, SslOptions, protocol::Startup};

/// Parameters of a single connection attempt, read from the options once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub address: SocketAddr,
    pub ssl: Option<SslOptions>,
    pub compression: Compression,
}

impl ConnectionSettings {
    /// Startup offer sent once the transport is established.
    pub fn startup(&self) -> Startup {
        Startup::new(self.compression)
    }
}

#[derive(Debug)]
pub struct Manager {
    contact_points: Vec<IpAddr>,
    options: Arc<ProtocolOptions>,
}

impl Manager {
    /// Creates a manager and registers it with `options`.
    pub fn new(contact_points: Vec<IpAddr>, options: Arc<ProtocolOptions>) -> Arc<Self> {
        let manager = Arc::new(Self {
            contact_points,
            options,
        });
        manager.options.register(Arc::downgrade(&manager));
        manager
    }

    pub fn options(&self) -> &ProtocolOptions {
        &self.options
    }

    pub fn contact_points(&self) -> &[IpAddr] {
        &self.contact_points
    }

    /// Whether the options still point back at this manager.
    pub fn is_registered(self: &Arc<Self>) -> bool {
        self.options
            .manager()
            .is_some_and(|registered| Arc::ptr_eq(&registered, self))
    }

    pub fn connection_settings(&self, host: IpAddr) -> ConnectionSettings {
        let settings = ConnectionSettings {
            address: SocketAddr::new(host, self.options.port()),
            ssl: self.options.ssl_options().cloned(),
            compression: self.options.compression(),
        };
        trace!("connection settings for {host}: {settings:?}");
        settings
    }

    /// Startup offer for a new connection to `host`, built from a fresh snapshot.
    pub fn startup(&self, host: IpAddr) -> Startup {
        self.connection_settings(host).startup()
    }
}
