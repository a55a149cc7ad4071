use fallback_dns_application::ports::Resolver;
use fallback_dns_domain::{Query, RecordClass, RecordType};
use std::time::Duration;
use tracing::debug;

/// What the command asks the resolver chain for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    Query(RecordType, RecordClass),
    AllRecords,
    Host,
}

pub async fn run_lookup(
    resolver: &dyn Resolver,
    name: &str,
    mode: LookupMode,
    timeout: Option<Duration>,
) -> anyhow::Result<()> {
    debug!(domain = %name, mode = ?mode, timeout = ?timeout, "Starting lookup");

    let answer = match mode {
        LookupMode::Host => {
            let ip = resolver.get_host_by_name(name, timeout).await?;
            println!("{}", ip);
            return Ok(());
        }
        LookupMode::AllRecords => resolver.lookup_all_records(name, timeout).await?,
        LookupMode::Query(record_type, class) => {
            let query = Query::new(name, record_type, class);
            resolver.query(&query, timeout).await?
        }
    };

    if answer.is_empty() {
        println!(";; no records for {}", name);
        return Ok(());
    }

    print_section("ANSWER", &answer.answers);
    print_section("AUTHORITY", &answer.authority);
    print_section("ADDITIONAL", &answer.additional);
    Ok(())
}

fn print_section(title: &str, records: &[fallback_dns_domain::Record]) {
    if records.is_empty() {
        return;
    }
    println!(";; {} SECTION:", title);
    for record in records {
        println!("{}", record);
    }
}
