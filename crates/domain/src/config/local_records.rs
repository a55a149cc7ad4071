use super::errors::ConfigError;
use crate::dns_record::{Record, RecordData, RecordType};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::sync::Arc;

/// Local DNS record served by a static resolver
///
/// Provides a fixed answer for a hostname without consulting any other
/// resolver. Typical entries are home network devices, development services
/// and aliases that should resolve even when upstream resolvers are down.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalDnsRecord {
    /// Hostname (e.g., "nas", "server", "printer")
    /// Will be combined with domain to form FQDN
    pub hostname: String,

    /// Optional domain override (e.g., "home.lan", "lab.local")
    /// If None, uses the provider's `local_domain`
    /// If both None, uses hostname as-is
    #[serde(default)]
    pub domain: Option<String>,

    /// Record value: an IP address for A/AAAA, a domain name for
    /// CNAME/NS/PTR/MX, free text for TXT
    pub value: String,

    /// Record type: "A", "AAAA", "CNAME", "NS", "PTR", "MX" or "TXT"
    pub record_type: String,

    /// MX preference (default 10)
    #[serde(default)]
    pub priority: Option<u16>,

    /// Time-to-live in seconds (optional, default 300)
    #[serde(default)]
    pub ttl: Option<u32>,
}

impl LocalDnsRecord {
    /// Build fully qualified domain name from hostname and domain
    ///
    /// # Examples
    /// ```
    /// use fallback_dns_domain::config::LocalDnsRecord;
    ///
    /// let record = LocalDnsRecord {
    ///     hostname: "nas".into(),
    ///     domain: Some("lab.local".into()),
    ///     value: "192.168.1.100".into(),
    ///     record_type: "A".into(),
    ///     priority: None,
    ///     ttl: None,
    /// };
    /// assert_eq!(record.fqdn(&None), "nas.lab.local");
    /// assert_eq!(record.fqdn(&Some("home.lan".into())), "nas.lab.local");
    /// ```
    pub fn fqdn(&self, default_domain: &Option<String>) -> String {
        if let Some(ref domain) = self.domain {
            format!("{}.{}", self.hostname, domain)
        } else if let Some(ref default) = default_domain {
            format!("{}.{}", self.hostname, default)
        } else {
            self.hostname.clone()
        }
    }

    /// Get TTL with default fallback
    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(300)
    }

    /// Convert into a resolved record owned by `fqdn(default_domain)`.
    pub fn to_record(&self, default_domain: &Option<String>) -> Result<Record, ConfigError> {
        let fqdn = self.fqdn(default_domain);
        let invalid = |reason: String| ConfigError::InvalidRecord {
            name: fqdn.clone(),
            reason,
        };

        let record_type: RecordType = self.record_type.parse().map_err(invalid)?;
        let value = self.value.trim();

        let data = match record_type {
            RecordType::A | RecordType::AAAA => {
                let ip: IpAddr = value
                    .parse()
                    .map_err(|_| invalid(format!("'{}' is not an IP address", value)))?;
                let data = RecordData::from(ip);
                if data.record_type() != record_type {
                    return Err(invalid(format!(
                        "{} is not a valid {} address",
                        ip, record_type
                    )));
                }
                data
            }
            RecordType::CNAME => RecordData::CNAME(name_value(value).map_err(invalid)?),
            RecordType::NS => RecordData::NS(name_value(value).map_err(invalid)?),
            RecordType::PTR => RecordData::PTR(name_value(value).map_err(invalid)?),
            RecordType::MX => RecordData::MX {
                preference: self.priority.unwrap_or(10),
                exchange: name_value(value).map_err(invalid)?,
            },
            RecordType::TXT => RecordData::TXT(vec![value.to_string()]),
            other => {
                return Err(invalid(format!(
                    "record type {} cannot be configured as a local record",
                    other
                )))
            }
        };

        Ok(Record::new(fqdn.as_str(), self.ttl_or_default(), data))
    }
}

fn name_value(value: &str) -> Result<Arc<str>, String> {
    if value.is_empty() {
        return Err("target name is empty".to_string());
    }
    Ok(Arc::from(value))
}
