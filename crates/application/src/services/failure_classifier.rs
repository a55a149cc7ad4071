use fallback_dns_domain::{FailureKind, ResolveError};

/// What a chain does after a resolver fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackDecision {
    /// Issue the same operation to the next resolver.
    Continue,
    /// Surface this failure to the caller now.
    Halt,
}

/// Decide whether a failed attempt falls through to the next resolver.
///
/// Depends only on the failure's kind, never on which resolver produced it.
pub fn classify(failure: &ResolveError) -> FallbackDecision {
    classify_kind(failure.kind())
}

/// Only kinds known to be safe to retry elsewhere continue. An authoritative
/// "does not exist" cannot be overruled by a less authoritative resolver, and
/// anything unexpected aborts the walk.
pub fn classify_kind(kind: FailureKind) -> FallbackDecision {
    match kind {
        FailureKind::Timeout | FailureKind::Unsupported | FailureKind::NameNotFound => {
            FallbackDecision::Continue
        }
        FailureKind::AuthoritativeNegative => FallbackDecision::Halt,
        FailureKind::ServerFailure
        | FailureKind::Refused
        | FailureKind::FormatError
        | FailureKind::Io
        | FailureKind::Other => FallbackDecision::Halt,
    }
}

/// Whether the kind belongs to the fallback taxonomy at all. Halting on a
/// kind outside it is a fatal propagation rather than a definitive answer.
pub fn is_recognized(kind: FailureKind) -> bool {
    matches!(
        kind,
        FailureKind::AuthoritativeNegative
            | FailureKind::Timeout
            | FailureKind::Unsupported
            | FailureKind::NameNotFound
    )
}
