use async_trait::async_trait;
use fallback_dns_domain::{AddressLookup, Answer, Query, RecordType, ResolveError};
use std::net::IpAddr;
use std::time::Duration;

/// Result of one resolution attempt.
pub type Outcome<T> = Result<T, ResolveError>;

/// Upper bound on CNAME hops followed by [`Resolver::get_host_by_name`].
pub const MAX_ALIAS_HOPS: usize = 10;

/// Application-layer port for anything that can answer DNS questions.
///
/// Leaf resolvers (static tables, caches, network clients) and the
/// [`ResolverChain`](crate::services::ResolverChain) all implement this trait,
/// so a chain can be placed inside another chain.
///
/// Implementations are shared behind `Arc` and only ever called through
/// `&self`; concurrent calls must not interfere with each other.
///
/// Failures are reported as [`ResolveError`] values. A chain inspects only the
/// error's kind to decide whether the next resolver is tried.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Generic query operation.
    async fn query(&self, query: &Query, timeout: Option<Duration>) -> Outcome<Answer>;

    /// Every record held for `name`.
    ///
    /// The default issues an `ANY` query in the `IN` class through [`Resolver::query`].
    async fn lookup_all_records(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.lookup(name, RecordType::ANY, timeout).await
    }

    /// Build an `IN` class query for `name` and issue it through [`Resolver::query`].
    async fn lookup(
        &self,
        name: &str,
        record_type: RecordType,
        timeout: Option<Duration>,
    ) -> Outcome<Answer> {
        let query = Query::internet(name, record_type);
        self.query(&query, timeout).await
    }

    async fn lookup_address(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.lookup(name, RecordType::A, timeout).await
    }

    async fn lookup_ipv6_address(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.lookup(name, RecordType::AAAA, timeout).await
    }

    async fn lookup_mail_exchange(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.lookup(name, RecordType::MX, timeout).await
    }

    async fn lookup_name_servers(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.lookup(name, RecordType::NS, timeout).await
    }

    async fn lookup_canonical_name(
        &self,
        name: &str,
        timeout: Option<Duration>,
    ) -> Outcome<Answer> {
        self.lookup(name, RecordType::CNAME, timeout).await
    }

    async fn lookup_pointer(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.lookup(name, RecordType::PTR, timeout).await
    }

    async fn lookup_authority(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.lookup(name, RecordType::SOA, timeout).await
    }

    async fn lookup_service(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.lookup(name, RecordType::SRV, timeout).await
    }

    async fn lookup_text(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.lookup(name, RecordType::TXT, timeout).await
    }

    /// First address for `name`, following CNAME aliases.
    ///
    /// Aliases resolved inside one answer are followed locally; a target with
    /// no address in the answer triggers a fresh [`Resolver::lookup_all_records`].
    /// Every alias counts against one budget of [`MAX_ALIAS_HOPS`] for the
    /// whole call, whether it was followed locally or through a new lookup.
    async fn get_host_by_name(&self, name: &str, timeout: Option<Duration>) -> Outcome<IpAddr> {
        let mut target = name.to_string();
        let mut hops_left = MAX_ALIAS_HOPS;

        loop {
            let answer = self.lookup_all_records(&target, timeout).await?;
            match answer.address_for(&target, hops_left) {
                AddressLookup::Found(ip) => return Ok(ip),
                AddressLookup::Alias { target: next, hops } => {
                    hops_left = hops_left.saturating_sub(hops);
                    target = next.to_string();
                }
                AddressLookup::TooManyAliases => {
                    return Err(ResolveError::Other(format!(
                        "alias chain for {} exceeds {} hops",
                        name, MAX_ALIAS_HOPS
                    )))
                }
                AddressLookup::Missing => return Err(ResolveError::NameNotFound(target)),
            }
        }
    }
}
