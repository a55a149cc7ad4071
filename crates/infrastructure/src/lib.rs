//! fallback-dns infrastructure: concrete resolvers and chain assembly
pub mod dns;
