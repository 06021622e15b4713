pub mod cli;
pub mod cluster;
pub mod compression;
pub mod options;
pub mod protocol;
pub mod ssl;

pub use cli::Cli;
pub use cluster::{ConnectionSettings, Manager};
pub use compression::Compression;
pub use options::{DEFAULT_PORT, OptionsError, ProtocolOptions};
pub use protocol::Startup;
pub use ssl::SslOptions;
