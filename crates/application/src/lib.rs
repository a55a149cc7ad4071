//! fallback-dns application layer: the resolver port and the fallback chain
pub mod ports;
pub mod services;
