#[path = "../common/mod.rs"]
mod common;

use common::{write_config, BlackholeResolver, TestDomains, HOME_CONFIG};
use fallback_dns_application::ports::Resolver;
use fallback_dns_application::services::ResolverChain;
use fallback_dns_domain::{CliOverrides, Config, FailureKind, RecordType};
use fallback_dns_infrastructure::dns::{ChainBuilder, StaticResolver, TimeoutResolver};
use std::net::IpAddr;
use std::sync::Arc;

fn load(contents: &str) -> Config {
    let file = write_config(contents);
    let path = file.path().to_str().expect("temp path is UTF-8").to_string();
    let config = Config::load(Some(path.as_str()), CliOverrides::default()).expect("config loads");
    config.validate().expect("config is valid");
    config
}

// ============================================================================
// Config file → chain → answer
// ============================================================================

#[tokio::test]
async fn test_local_name_is_answered_by_hosts_table() {
    let config = load(HOME_CONFIG);
    let chain = ChainBuilder::from_config(&config.resolver).unwrap();

    let ip = chain
        .get_host_by_name(TestDomains::local_nas(), config.resolver.timeout())
        .await
        .unwrap();

    assert_eq!(ip, "192.168.1.10".parse::<IpAddr>().unwrap());
}

#[tokio::test]
async fn test_local_alias_is_followed() {
    let config = load(HOME_CONFIG);
    let chain = ChainBuilder::from_config(&config.resolver).unwrap();

    let ip = chain
        .get_host_by_name(TestDomains::local_alias(), config.resolver.timeout())
        .await
        .unwrap();

    assert_eq!(ip, "192.168.1.10".parse::<IpAddr>().unwrap());
}

#[tokio::test]
async fn test_missing_local_name_never_reaches_upstream() {
    let config = load(HOME_CONFIG);
    let chain = ChainBuilder::from_config(&config.resolver).unwrap();

    let err = chain
        .lookup_address(TestDomains::missing_local(), config.resolver.timeout())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::AuthoritativeNegative);
}

#[tokio::test]
async fn test_public_name_falls_through_to_nested_upstream() {
    let config = load(HOME_CONFIG);
    let chain = ChainBuilder::from_config(&config.resolver).unwrap();

    let ip = chain
        .get_host_by_name(TestDomains::public(), config.resolver.timeout())
        .await
        .unwrap();

    assert_eq!(ip, "2001:db8::80".parse::<IpAddr>().unwrap());
}

#[tokio::test]
async fn test_unknown_name_reports_final_failure() {
    let config = load(HOME_CONFIG);
    let chain = ChainBuilder::from_config(&config.resolver).unwrap();

    let err = chain
        .lookup_ipv6_address(TestDomains::nonexistent(), config.resolver.timeout())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::NameNotFound);
    assert!(err.to_string().contains("public"));
}

// ============================================================================
// Composed by hand: hosts → unreachable upstream → backup
// ============================================================================

#[tokio::test]
async fn test_unreachable_upstream_times_out_into_backup() {
    let config = load(HOME_CONFIG);
    let fallback_dns_domain::config::ProviderConfig::Static(hosts) = &config.resolver.providers[0]
    else {
        panic!("first provider should be the hosts table");
    };
    let hosts: Arc<dyn Resolver> = Arc::new(StaticResolver::from_config(hosts).unwrap());
    let blackhole = Arc::new(BlackholeResolver::default());
    let backup: Arc<dyn Resolver> = Arc::new(StaticResolver::new(
        "backup",
        vec![fallback_dns_domain::Record::new(
            TestDomains::public(),
            60,
            fallback_dns_domain::RecordData::A("203.0.113.80".parse().unwrap()),
        )],
    ));

    let chain = ResolverChain::new(vec![
        hosts,
        Arc::new(TimeoutResolver::new(blackhole.clone())),
        backup,
    ])
    .unwrap();

    let answer = chain
        .lookup(TestDomains::public(), RecordType::A, config.resolver.timeout())
        .await
        .unwrap();

    assert_eq!(answer.answers.len(), 1);
    assert_eq!(blackhole.calls(), 1);
}

#[tokio::test]
async fn test_timeout_override_from_cli_is_used() {
    let file = write_config(HOME_CONFIG);
    let path = file.path().to_str().unwrap().to_string();
    let config = Config::load(
        Some(path.as_str()),
        CliOverrides {
            timeout_ms: Some(5),
            log_level: None,
        },
    )
    .unwrap();

    assert_eq!(
        config.resolver.timeout(),
        Some(std::time::Duration::from_millis(5))
    );
}
