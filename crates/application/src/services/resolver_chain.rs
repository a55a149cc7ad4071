use super::failure_classifier::{classify, is_recognized, FallbackDecision};
use crate::ports::{Outcome, Resolver};
use async_trait::async_trait;
use fallback_dns_domain::{Answer, ChainConstructionError, Query, ResolveError};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Ordered fallback across resolvers
///
/// Each call tries the first resolver; a failure the classifier marks as
/// `Continue` sends the identical arguments to the next resolver, a `Halt`
/// returns that failure at once. When every resolver has been tried the last
/// failure is returned.
///
/// Attempts are strictly sequential and the chain keeps no state between
/// calls. Dropping the returned future drops the in-flight attempt, so no
/// later resolver is ever issued after cancellation.
///
/// The caller's timeout is passed verbatim to every attempt and is not reduced
/// by time already spent, so a fully exhausted chain of N resolvers can take
/// up to N × timeout.
pub struct ResolverChain {
    head: Arc<dyn Resolver>,
    tail: Box<[Arc<dyn Resolver>]>,
}

impl ResolverChain {
    /// Fails with [`ChainConstructionError::Empty`] when `resolvers` is empty.
    pub fn new(resolvers: Vec<Arc<dyn Resolver>>) -> Result<Self, ChainConstructionError> {
        let mut resolvers = resolvers.into_iter();
        let head = resolvers.next().ok_or(ChainConstructionError::Empty)?;

        Ok(Self {
            head,
            tail: resolvers.collect(),
        })
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn resolvers(&self) -> impl Iterator<Item = &Arc<dyn Resolver>> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Walk the resolvers with `attempt`, which issues one operation with
    /// arguments captured once by the caller.
    async fn walk<'a, T, F, Fut>(&'a self, operation: &'static str, name: &str, attempt: F) -> Outcome<T>
    where
        F: Fn(&'a dyn Resolver) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        let mut outcome = attempt(self.head.as_ref()).await;

        for (position, next) in self.tail.iter().enumerate() {
            let failure = match outcome {
                Ok(value) => return Ok(value),
                Err(failure) => failure,
            };

            match classify(&failure) {
                FallbackDecision::Continue => {
                    debug!(
                        operation,
                        domain = %name,
                        attempt = position + 1,
                        kind = %failure.kind(),
                        error = %failure,
                        "Resolver failed, trying next"
                    );
                }
                FallbackDecision::Halt if !is_fatal(&failure) => {
                    debug!(
                        operation,
                        domain = %name,
                        attempt = position + 1,
                        error = %failure,
                        "Definitive failure, halting chain"
                    );
                    return Err(failure);
                }
                FallbackDecision::Halt => {
                    warn!(
                        operation,
                        domain = %name,
                        attempt = position + 1,
                        kind = %failure.kind(),
                        error = %failure,
                        "Unrecognized failure, aborting chain"
                    );
                    return Err(failure);
                }
            }

            outcome = attempt(next.as_ref()).await;
        }

        match outcome {
            Err(ref failure) if is_fatal(failure) => {
                warn!(
                    operation,
                    domain = %name,
                    attempt = self.len(),
                    kind = %failure.kind(),
                    error = %failure,
                    "Unrecognized failure from last resolver"
                );
            }
            Err(ref failure) => {
                debug!(
                    operation,
                    domain = %name,
                    attempts = self.len(),
                    error = %failure,
                    "Resolver chain finished with failure"
                );
            }
            Ok(_) => {}
        }

        outcome
    }
}

/// A halt on a kind outside the fallback taxonomy, reported at `warn`
/// wherever in the chain it happens.
fn is_fatal(failure: &ResolveError) -> bool {
    classify(failure) == FallbackDecision::Halt && !is_recognized(failure.kind())
}

impl fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverChain")
            .field("resolvers", &self.len())
            .finish()
    }
}

#[async_trait]
impl Resolver for ResolverChain {
    async fn query(&self, query: &Query, timeout: Option<Duration>) -> Outcome<Answer> {
        self.walk("query", query.name(), |resolver| resolver.query(query, timeout))
            .await
    }

    async fn lookup_all_records(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.walk("lookup_all_records", name, |resolver| {
            resolver.lookup_all_records(name, timeout)
        })
        .await
    }
}
