pub mod answer;
pub mod record;
pub mod record_class;
pub mod record_type;

pub use answer::{AddressLookup, Answer};
pub use record::{same_name, Record, RecordData};
pub use record_class::RecordClass;
pub use record_type::RecordType;
