//! Capabilities provided by the hosting search framework.
//!
//! The core never renders anything. A host implements these traits to turn
//! records into result cards and department ids into browsable categories.

use crate::StreamRecord;

pub trait ResultSink {
    /// Hand one record to the consumer.
    ///
    /// Returns `false` once the consumer has been cancelled, after which no
    /// further records should be pushed.
    fn push(&mut self, record: &StreamRecord) -> bool;
}

pub trait DepartmentRegistrar {
    fn register_department(&mut self, id: &str);
}
