use async_trait::async_trait;
use fallback_dns_application::ports::{Outcome, Resolver};
use fallback_dns_domain::config::{ConfigError, StaticProviderConfig};
use fallback_dns_domain::{Answer, Query, Record, RecordClass, RecordType, ResolveError};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Resolver backed by a fixed in-memory record table
///
/// Answers from the table and never blocks. A name missing from the table
/// is reported as `NameNotFound` so a chain moves on, unless the name falls
/// inside one of the authoritative zones, where it becomes a definitive
/// `AuthoritativeNegative`.
pub struct StaticResolver {
    label: Arc<str>,
    records: HashMap<String, Vec<Record>>,
    authoritative_zones: Vec<String>,
}

impl StaticResolver {
    pub fn new(label: impl Into<Arc<str>>, records: Vec<Record>) -> Self {
        let mut table: HashMap<String, Vec<Record>> = HashMap::new();
        for record in records {
            table
                .entry(normalize(&record.name))
                .or_default()
                .push(record);
        }

        Self {
            label: label.into(),
            records: table,
            authoritative_zones: Vec::new(),
        }
    }

    /// Mark `zones` (and all names below them) as answered authoritatively.
    pub fn with_authoritative_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.authoritative_zones = zones.into_iter().map(|z| normalize(z.as_ref())).collect();
        self
    }

    pub fn from_config(config: &StaticProviderConfig) -> Result<Self, ConfigError> {
        let records = config
            .records
            .iter()
            .map(|r| r.to_record(&config.local_domain))
            .collect::<Result<Vec<_>, _>>()?;

        let label = config.name.clone().unwrap_or_else(|| "static".to_string());
        Ok(Self::new(label, records).with_authoritative_zones(&config.authoritative_zones))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Matches the zone itself and every subdomain of it.
    pub fn is_authoritative_for(&self, name: &str) -> bool {
        let name = normalize(name);
        self.authoritative_zones
            .iter()
            .any(|zone| name == *zone || name.ends_with(&format!(".{}", zone)))
    }

    fn answer(&self, name: &str, record_type: RecordType) -> Outcome<Answer> {
        let Some(records) = self.records.get(&normalize(name)) else {
            return Err(self.miss(name, record_type));
        };

        let mut matching: Vec<Record> = records
            .iter()
            .filter(|r| record_type.matches(r.record_type()))
            .cloned()
            .collect();

        if matching.is_empty() {
            matching = records
                .iter()
                .filter(|r| r.record_type() == RecordType::CNAME)
                .cloned()
                .collect();
        }

        if matching.is_empty() && !self.is_authoritative_for(name) {
            return Err(self.miss(name, record_type));
        }

        debug!(
            resolver = %self.label,
            domain = %name,
            record_type = %record_type,
            records = matching.len(),
            "Static table answered"
        );
        Ok(Answer::new(matching))
    }

    fn miss(&self, name: &str, record_type: RecordType) -> ResolveError {
        if self.is_authoritative_for(name) {
            debug!(resolver = %self.label, domain = %name, "Authoritative miss");
            ResolveError::AuthoritativeNegative(format!("{} {} does not exist", name, record_type))
        } else {
            ResolveError::NameNotFound(format!("{} {} not in {}", name, record_type, self.label))
        }
    }
}

#[async_trait]
impl Resolver for StaticResolver {
    async fn query(&self, query: &Query, _timeout: Option<Duration>) -> Outcome<Answer> {
        match query.class() {
            RecordClass::IN | RecordClass::ANY => self.answer(query.name(), query.record_type()),
            other => Err(ResolveError::Unsupported(format!(
                "{} does not serve class {}",
                self.label, other
            ))),
        }
    }

    async fn lookup_all_records(&self, name: &str, _timeout: Option<Duration>) -> Outcome<Answer> {
        self.answer(name, RecordType::ANY)
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}
