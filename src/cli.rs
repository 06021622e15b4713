//! Bootstrap configuration for the protocol options.
//!
//! Every setting can be given as a flag or, for the common ones, through the environment
//! (`PROTOCOL_PORT`, `PROTOCOL_COMPRESSION`).
use std::{net::IpAddr, path::PathBuf};

use clap::Parser;

use crate::{DEFAULT_PORT, OptionsError, ProtocolOptions, SslOptions};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Hosts to open connections to
    #[arg(default_value = "127.0.0.1")]
    pub contact_points: Vec<IpAddr>,

    /// Native protocol port
    #[arg(short, long, env = "PROTOCOL_PORT", default_value_t = u32::from(DEFAULT_PORT))]
    pub port: u32,

    /// Compression offered to new connections: none, snappy or lz4
    #[arg(short, long, env = "PROTOCOL_COMPRESSION", default_value = "none")]
    pub compression: String,

    /// Wrap connections with TLS
    #[arg(long)]
    pub ssl: bool,

    /// PEM bundle of trusted CA certificates
    #[arg(long, requires = "ssl")]
    pub ssl_ca: Option<PathBuf>,

    /// Client certificate for mutual TLS
    #[arg(long, requires = "ssl")]
    pub ssl_cert: Option<PathBuf>,

    /// Private key for the client certificate
    #[arg(long, requires = "ssl_cert")]
    pub ssl_key: Option<PathBuf>,

    /// Allowed cipher suite, may be repeated
    #[arg(long = "cipher", requires = "ssl")]
    pub ciphers: Vec<String>,

    /// Accept server certificates whose name does not match the host
    #[arg(long, requires = "ssl")]
    pub no_hostname_verification: bool,
}

impl Cli {
    /// Builds the protocol options described by the parsed arguments.
    pub fn options(&self) -> Result<ProtocolOptions, OptionsError> {
        let port = u16::try_from(self.port).map_err(|_| OptionsError::InvalidPort(self.port))?;
        let ssl = self.ssl.then(|| SslOptions {
            ca_cert_path: self.ssl_ca.clone(),
            cert_path: self.ssl_cert.clone(),
            key_path: self.ssl_key.clone(),
            cipher_suites: self.ciphers.clone(),
            verify_hostname: !self.no_hostname_verification,
        });

        let options = ProtocolOptions::new(port, ssl)?;
        options.set_compression_name(&self.compression)?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use crate::Compression;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("protocol_options").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn cli_defaults() {
        // SAFETY: std serialises its own environment access and no foreign code runs here.
        unsafe {
            std::env::remove_var("PROTOCOL_PORT");
            std::env::remove_var("PROTOCOL_COMPRESSION");
        }
        let cli = parse(&[]);
        let options = cli.options().unwrap();

        assert_eq!(cli.contact_points, vec![IpAddr::from([127, 0, 0, 1])]);
        assert_eq!(options.port(), 9042);
        assert_eq!(options.compression(), Compression::None);
        assert!(options.ssl_options().is_none());
    }

    #[test]
    fn cli_port_and_compression() {
        let cli = parse(&["--port", "9142", "--compression", "snappy", "10.0.0.1"]);
        let options = cli.options().unwrap();

        assert_eq!(cli.contact_points, vec![IpAddr::from([10, 0, 0, 1])]);
        assert_eq!(options.port(), 9142);
        assert_eq!(options.compression(), Compression::Snappy);
    }

    #[test]
    fn cli_ssl_options() {
        let cli = parse(&[
            "--port",
            "9142",
            "--ssl",
            "--ssl-ca",
            "ca.pem",
            "--cipher",
            "TLS13_AES_128_GCM_SHA256",
            "--cipher",
            "TLS13_CHACHA20_POLY1305_SHA256",
            "--no-hostname-verification",
        ]);
        let options = cli.options().unwrap();
        let ssl = options.ssl_options().unwrap();

        assert_eq!(ssl.ca_cert_path, Some(PathBuf::from("ca.pem")));
        assert_eq!(ssl.cert_path, None);
        assert_eq!(ssl.cipher_suites.len(), 2);
        assert!(!ssl.verify_hostname);
    }

    #[test]
    fn cli_ssl_flags_require_ssl() {
        let res = Cli::try_parse_from(["protocol_options", "--ssl-ca", "ca.pem"]);
        assert!(res.is_err());
    }

    #[test]
    fn cli_rejects_port_zero() {
        let err = parse(&["--port", "0"]).options().unwrap_err();
        assert_eq!(err, OptionsError::InvalidPort(0));
    }

    #[test]
    fn cli_rejects_out_of_range_port() {
        let err = parse(&["--port", "70000"]).options().unwrap_err();
        assert_eq!(err, OptionsError::InvalidPort(70000));
    }

    #[test]
    #[should_panic(expected = "InvalidCompression(\"gzip\")")]
    fn cli_rejects_unknown_compression() {
        parse(&["--port", "9042", "--compression", "gzip"])
            .options()
            .unwrap();
    }
}
