pub mod resolver;

pub use resolver::{Outcome, Resolver, MAX_ALIAS_HOPS};
