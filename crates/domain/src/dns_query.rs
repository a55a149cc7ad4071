use super::{RecordClass, RecordType};
use std::fmt;
use std::sync::Arc;

/// DNS question (name + record type + record class).
///
/// Fields are private so a query cannot change once built; `Arc<str>` keeps
/// cloning cheap when the same question is handed to several resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    name: Arc<str>,
    record_type: RecordType,
    class: RecordClass,
}

impl Query {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, class: RecordClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }

    /// Query in the `IN` class.
    pub fn internet(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self::new(name, record_type, RecordClass::IN)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn class(&self) -> RecordClass {
        self.class
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.class, self.record_type)
    }
}
