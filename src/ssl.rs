use std::path::PathBuf;

/// Transport security material handed to the connection layer.
///
/// The registry only stores this value; certificate loading and the
/// handshake itself happen wherever connections are opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SslOptions {
    /// Path to a PEM bundle of trusted CA certificates. System roots when unset.
    pub ca_cert_path: Option<PathBuf>,
    /// Path to the client certificate presented for mutual TLS.
    pub cert_path: Option<PathBuf>,
    /// Path to the private key matching `cert_path`.
    pub key_path: Option<PathBuf>,
    /// Allowed cipher suites. Empty means the TLS library defaults.
    pub cipher_suites: Vec<String>,
    pub verify_hostname: bool,
}

impl Default for SslOptions {
    fn default() -> Self {
        Self {
            ca_cert_path: None,
            cert_path: None,
            key_path: None,
            cipher_suites: Vec::new(),
            verify_hostname: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_verifies_hostname() {
        let ssl = SslOptions::default();

        assert!(ssl.verify_hostname);
        assert!(ssl.cipher_suites.is_empty());
        assert_eq!(ssl.ca_cert_path, None);
    }
}
