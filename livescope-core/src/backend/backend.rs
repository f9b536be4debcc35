use crate::error::Result;

use super::structs::{DepartmentList, StreamList};

/// A source of live streams, as seen by the query handler.
pub trait StreamBackend {
    /// Search live streams matching `search_text`, in relevance order.
    fn query_streams(&self, search_text: &str) -> Result<StreamList>;

    /// List the department (category) identifiers offered by the service.
    fn query_departments(&self) -> Result<DepartmentList>;

    /// Abandon the in-flight request, and every later one.
    ///
    /// May be called from any thread.
    fn cancel(&self);
}
