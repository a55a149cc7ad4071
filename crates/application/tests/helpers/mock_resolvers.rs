use async_trait::async_trait;
use fallback_dns_application::ports::{Outcome, Resolver};
use fallback_dns_domain::{Answer, Query, Record, RecordData, ResolveError};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Recorded calls
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Query(Query, Option<Duration>),
    AllRecords(String, Option<Duration>),
}

/// Shared, ordered log of resolver start/finish events across several mocks
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn a_record(name: &str, last_octet: u8) -> Record {
    Record::new(name, 300, RecordData::A(Ipv4Addr::new(192, 0, 2, last_octet)))
}

pub fn answer_for(name: &str, last_octet: u8) -> Answer {
    Answer::new(vec![a_record(name, last_octet)])
}

// ============================================================================
// ScriptedResolver: always returns the same outcome
// ============================================================================

#[derive(Clone)]
pub struct ScriptedResolver {
    label: &'static str,
    outcome: Outcome<Answer>,
    delay: Option<Duration>,
    calls: Arc<RwLock<Vec<Call>>>,
    journal: Option<Journal>,
}

impl ScriptedResolver {
    pub fn answering(label: &'static str, answer: Answer) -> Self {
        Self::with_outcome(label, Ok(answer))
    }

    pub fn failing(label: &'static str, error: ResolveError) -> Self {
        Self::with_outcome(label, Err(error))
    }

    fn with_outcome(label: &'static str, outcome: Outcome<Answer>) -> Self {
        Self {
            label,
            outcome,
            delay: None,
            calls: Arc::new(RwLock::new(Vec::new())),
            journal: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_journal(mut self, journal: &Journal) -> Self {
        self.journal = Some(Arc::clone(journal));
        self
    }

    pub fn shared(&self) -> Arc<dyn Resolver> {
        Arc::new(self.clone())
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    async fn respond(&self, call: Call) -> Outcome<Answer> {
        self.calls.write().await.push(call);
        self.log("start");

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.log("finish");
        self.outcome.clone()
    }

    fn log(&self, event: &str) {
        if let Some(journal) = &self.journal {
            journal
                .lock()
                .unwrap()
                .push(format!("{}:{}", event, self.label));
        }
    }
}

#[async_trait]
impl Resolver for ScriptedResolver {
    async fn query(&self, query: &Query, timeout: Option<Duration>) -> Outcome<Answer> {
        self.respond(Call::Query(query.clone(), timeout)).await
    }

    async fn lookup_all_records(&self, name: &str, timeout: Option<Duration>) -> Outcome<Answer> {
        self.respond(Call::AllRecords(name.to_string(), timeout))
            .await
    }
}

// ============================================================================
// EchoResolver: answers every query with an A record for the queried name
// ============================================================================

#[derive(Default)]
pub struct EchoResolver {
    delay: Option<Duration>,
}

impl EchoResolver {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay: Some(delay) }
    }
}

#[async_trait]
impl Resolver for EchoResolver {
    async fn query(&self, query: &Query, _timeout: Option<Duration>) -> Outcome<Answer> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(answer_for(query.name(), 1))
    }
}

// ============================================================================
// AliasLadderResolver: a0 -> a1 -> ... -> aN, with an address only for aN
// ============================================================================

/// Serves the alias ladder `a0.ladder.test` → … → `a{hops}.ladder.test`.
///
/// With `whole_ladder` every answer holds all rungs, so aliases are followed
/// inside one answer; otherwise each answer holds a single rung and every
/// hop needs a new lookup.
pub struct AliasLadderResolver {
    hops: usize,
    whole_ladder: bool,
    lookups: AtomicUsize,
}

impl AliasLadderResolver {
    pub fn whole(hops: usize) -> Self {
        Self::new(hops, true)
    }

    pub fn one_rung_per_answer(hops: usize) -> Self {
        Self::new(hops, false)
    }

    fn new(hops: usize, whole_ladder: bool) -> Self {
        Self {
            hops,
            whole_ladder,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn rung(index: usize) -> String {
        format!("a{}.ladder.test", index)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn record(&self, index: usize) -> Record {
        if index == self.hops {
            a_record(&Self::rung(index), 9)
        } else {
            Record::new(
                Self::rung(index),
                60,
                RecordData::CNAME(Arc::from(Self::rung(index + 1))),
            )
        }
    }
}

#[async_trait]
impl Resolver for AliasLadderResolver {
    async fn query(&self, query: &Query, _timeout: Option<Duration>) -> Outcome<Answer> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let index = (0..=self.hops)
            .find(|i| Self::rung(*i) == query.name())
            .ok_or_else(|| ResolveError::NameNotFound(query.name().to_string()))?;

        if self.whole_ladder {
            Ok(Answer::new((0..=self.hops).map(|i| self.record(i)).collect()))
        } else {
            Ok(Answer::new(vec![self.record(index)]))
        }
    }
}

// ============================================================================
// PendingResolver: never completes, reports when its attempt is dropped
// ============================================================================

#[derive(Clone, Default)]
pub struct PendingResolver {
    started: Arc<AtomicUsize>,
    dropped: Arc<AtomicBool>,
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl PendingResolver {
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn was_dropped(&self) -> bool {
        self.dropped.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Resolver for PendingResolver {
    async fn query(&self, _query: &Query, _timeout: Option<Duration>) -> Outcome<Answer> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let _flag = DropFlag(Arc::clone(&self.dropped));
        std::future::pending().await
    }
}
