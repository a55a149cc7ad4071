use async_trait::async_trait;
use fallback_dns_application::ports::{Outcome, Resolver};
use fallback_dns_domain::{Answer, Query, ResolveError};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Timeout decorator for a resolver
///
/// Bounds each call to the inner resolver by the timeout the caller passed
/// and turns expiry into `ResolveError::Timeout`, which a chain treats as a
/// reason to try the next resolver. The timeout is still forwarded to the
/// inner resolver unchanged. An absent timeout means no bound.
pub struct TimeoutResolver {
    inner: Arc<dyn Resolver>,
}

impl TimeoutResolver {
    pub fn new(inner: Arc<dyn Resolver>) -> Self {
        Self { inner }
    }
}

async fn bounded<T>(
    limit: Option<Duration>,
    what: impl FnOnce() -> String,
    attempt: impl Future<Output = Outcome<T>>,
) -> Outcome<T> {
    let Some(limit) = limit else {
        return attempt.await;
    };

    match tokio::time::timeout(limit, attempt).await {
        Ok(outcome) => outcome,
        Err(_) => {
            let what = what();
            debug!(query = %what, timeout_ms = limit.as_millis() as u64, "Resolver timed out");
            Err(ResolveError::Timeout(format!(
                "{} after {}ms",
                what,
                limit.as_millis()
            )))
        }
    }
}

#[async_trait]
impl Resolver for TimeoutResolver {
    async fn query(&self, query: &Query, timeout: Option<Duration>) -> Outcome<Answer> {
        bounded(timeout, || query.to_string(), self.inner.query(query, timeout)).await
    }

    async fn lookup_all_records(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        bounded(
            timeout,
            || format!("{} ANY", name),
            self.inner.lookup_all_records(name, timeout),
        )
        .await
    }
}
