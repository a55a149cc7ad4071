//! Configuration module for fallback-dns
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Resolver chain and provider definitions
//! - `local_records`: Records served by static providers
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod local_records;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use local_records::LocalDnsRecord;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::{ChainProviderConfig, ProviderConfig, ResolverConfig, StaticProviderConfig};
pub use root::{CliOverrides, Config};
