use super::static_resolver::StaticResolver;
use super::timeout_layer::TimeoutResolver;
use fallback_dns_application::ports::Resolver;
use fallback_dns_application::services::ResolverChain;
use fallback_dns_domain::config::{ConfigError, ProviderConfig, ResolverConfig};
use fallback_dns_domain::ChainConstructionError;
use std::sync::Arc;
use tracing::info;

/// Collects resolvers in fallback order and builds a [`ResolverChain`].
#[derive(Default)]
pub struct ChainBuilder {
    resolvers: Vec<Arc<dyn Resolver>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver after those already added.
    pub fn with_resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolvers.push(resolver);
        self
    }

    /// Append a resolver wrapped in a [`TimeoutResolver`].
    pub fn with_bounded_resolver(self, resolver: Arc<dyn Resolver>) -> Self {
        self.with_resolver(Arc::new(TimeoutResolver::new(resolver)))
    }

    pub fn build(self) -> Result<ResolverChain, ChainConstructionError> {
        ResolverChain::new(self.resolvers)
    }

    /// Build the configured chain, recursing into nested chains.
    pub fn from_config(config: &ResolverConfig) -> Result<ResolverChain, ConfigError> {
        let chain = Self::from_providers(&config.providers)?;

        info!(
            resolvers = chain.len(),
            timeout_ms = ?config.timeout_ms,
            "Resolver chain built"
        );
        Ok(chain)
    }

    fn from_providers(providers: &[ProviderConfig]) -> Result<ResolverChain, ConfigError> {
        let mut builder = Self::new();
        for provider in providers {
            let resolver = build_provider(provider)?;
            builder = if provider.enforce_timeout() {
                builder.with_bounded_resolver(resolver)
            } else {
                builder.with_resolver(resolver)
            };
        }
        Ok(builder.build()?)
    }
}

fn build_provider(provider: &ProviderConfig) -> Result<Arc<dyn Resolver>, ConfigError> {
    match provider {
        ProviderConfig::Static(table) => {
            let resolver = StaticResolver::from_config(table)?;
            info!(
                resolver = %resolver.label(),
                records = table.records.len(),
                authoritative_zones = table.authoritative_zones.len(),
                "Static resolver loaded"
            );
            Ok(Arc::new(resolver))
        }
        ProviderConfig::Chain(nested) => {
            let chain = ChainBuilder::from_providers(&nested.providers)?;
            info!(
                chain = nested.name.as_deref().unwrap_or("unnamed"),
                resolvers = chain.len(),
                "Nested resolver chain built"
            );
            Ok(Arc::new(chain))
        }
    }
}
