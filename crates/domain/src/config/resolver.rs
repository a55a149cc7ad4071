use super::errors::ConfigError;
use super::local_records::LocalDnsRecord;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resolver chain configuration
///
/// `providers` is tried in order; each entry is either a static record table
/// or a nested chain with its own provider list.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Per-attempt timeout in milliseconds, handed unchanged to every provider.
    /// None means no timeout.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == Some(0) {
            return Err(ConfigError::Validation(
                "resolver.timeout_ms must be greater than zero".to_string(),
            ));
        }
        validate_providers("resolver", &self.providers)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderConfig {
    Static(StaticProviderConfig),
    Chain(ChainProviderConfig),
}

impl ProviderConfig {
    pub fn name(&self) -> Option<&str> {
        match self {
            ProviderConfig::Static(p) => p.name.as_deref(),
            ProviderConfig::Chain(p) => p.name.as_deref(),
        }
    }

    /// Whether the provider is wrapped so that it fails with a timeout once the
    /// caller's timeout elapses.
    pub fn enforce_timeout(&self) -> bool {
        match self {
            ProviderConfig::Static(p) => p.enforce_timeout,
            ProviderConfig::Chain(p) => p.enforce_timeout,
        }
    }
}

/// In-memory record table
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StaticProviderConfig {
    #[serde(default)]
    pub name: Option<String>,

    /// Domain appended to records without an explicit `domain`
    #[serde(default)]
    pub local_domain: Option<String>,

    /// Zones this table answers authoritatively: a miss inside one of them
    /// is a definitive "does not exist" rather than "not known here"
    #[serde(default)]
    pub authoritative_zones: Vec<String>,

    #[serde(default)]
    pub records: Vec<LocalDnsRecord>,

    #[serde(default)]
    pub enforce_timeout: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChainProviderConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub providers: Vec<ProviderConfig>,

    #[serde(default)]
    pub enforce_timeout: bool,
}

fn validate_providers(path: &str, providers: &[ProviderConfig]) -> Result<(), ConfigError> {
    if providers.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{}.providers must contain at least one provider",
            path
        )));
    }

    for (index, provider) in providers.iter().enumerate() {
        let provider_path = format!("{}.providers[{}]", path, index);
        match provider {
            ProviderConfig::Static(table) => {
                if table.authoritative_zones.iter().any(|z| z.trim().is_empty()) {
                    return Err(ConfigError::Validation(format!(
                        "{}.authoritative_zones contains an empty zone",
                        provider_path
                    )));
                }
                for record in &table.records {
                    record.to_record(&table.local_domain)?;
                }
            }
            ProviderConfig::Chain(chain) => validate_providers(&provider_path, &chain.providers)?,
        }
    }

    Ok(())
}
