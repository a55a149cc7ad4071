//! Concrete resolvers and chain assembly
//!
//! Every type here implements the `Resolver` port, so any of them can sit in
//! a `ResolverChain` or wrap another resolver:
//!
//! - **StaticResolver**: fixed records from configuration
//! - **TimeoutResolver**: decorator enforcing the caller's per-attempt timeout
//! - **ChainBuilder**: assembles (possibly nested) chains from configuration
//!
//! ## Example Usage
//!
//! ```no_run
//! use fallback_dns_infrastructure::dns::resolver::ChainBuilder;
//! # fn demo(config: &fallback_dns_domain::config::ResolverConfig) {
//! let chain = ChainBuilder::from_config(config).expect("valid resolver config");
//! # }
//! ```

pub mod builder;
pub mod static_resolver;
pub mod timeout_layer;

pub use builder::ChainBuilder;
pub use static_resolver::StaticResolver;
pub use timeout_layer::TimeoutResolver;
