pub mod resolver;

pub use resolver::{ChainBuilder, StaticResolver, TimeoutResolver};
