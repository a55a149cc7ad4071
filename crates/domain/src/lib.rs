//! fallback-dns domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::Query;
pub use dns_record::{AddressLookup, Answer, Record, RecordClass, RecordData, RecordType};
pub use errors::{ChainConstructionError, FailureKind, ResolveError};
