#![allow(dead_code)]

use async_trait::async_trait;
use fallback_dns_application::ports::{Outcome, Resolver};
use fallback_dns_domain::{Answer, Query};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::NamedTempFile;

/// Common test domains
pub struct TestDomains;

impl TestDomains {
    pub fn local_nas() -> &'static str {
        "nas.home.lan"
    }

    pub fn local_alias() -> &'static str {
        "files.home.lan"
    }

    pub fn missing_local() -> &'static str {
        "printer.home.lan"
    }

    pub fn public() -> &'static str {
        "www.example.test"
    }

    pub fn nonexistent() -> &'static str {
        "nonexistent.invalid"
    }
}

/// Hosts table authoritative for home.lan, then a nested "upstream" chain
/// holding a public table that reaches its address through an alias.
pub const HOME_CONFIG: &str = r#"
[logging]
level = "debug"

[resolver]
timeout_ms = 50

[[resolver.providers]]
kind = "static"
name = "hosts"
local_domain = "home.lan"
authoritative_zones = ["home.lan"]

[[resolver.providers.records]]
hostname = "nas"
value = "192.168.1.10"
record_type = "A"

[[resolver.providers.records]]
hostname = "files"
value = "nas.home.lan"
record_type = "CNAME"

[[resolver.providers]]
kind = "chain"
name = "upstream"

[[resolver.providers.providers]]
kind = "static"
name = "public"

[[resolver.providers.providers.records]]
hostname = "www"
domain = "example.test"
value = "www.cdn.example.test"
record_type = "CNAME"

[[resolver.providers.providers.records]]
hostname = "www.cdn"
domain = "example.test"
value = "2001:db8::80"
record_type = "AAAA"
"#;

pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

/// Resolver that never answers before the caller's timeout and counts calls
#[derive(Default)]
pub struct BlackholeResolver {
    pub calls: AtomicUsize,
}

impl BlackholeResolver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Resolver for BlackholeResolver {
    async fn query(&self, _query: &Query, timeout: Option<Duration>) -> Outcome<Answer> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let wait = timeout.unwrap_or(Duration::from_secs(5)) * 4;
        tokio::time::sleep(wait).await;
        Ok(Answer::default())
    }
}
