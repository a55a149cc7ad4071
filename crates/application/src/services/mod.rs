pub mod failure_classifier;
pub mod resolver_chain;

pub use failure_classifier::{classify, classify_kind, FallbackDecision};
pub use resolver_chain::ResolverChain;
