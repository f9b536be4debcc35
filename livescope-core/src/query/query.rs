use crate::{
    constants::DEFAULT_SEARCH_TERM,
    error::{Error, Result},
    DepartmentRegistrar, ResultSink, StreamBackend,
};

/// The user's input as delivered by the host: search text plus an optional
/// department selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CannedQuery {
    pub query_string: String,
    pub department_id: Option<String>,
}

impl CannedQuery {
    pub fn new(query_string: impl Into<String>) -> Self {
        Self {
            query_string: query_string.into(),
            department_id: None,
        }
    }

    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Every record was pushed.
    Completed { pushed: usize },
    /// The sink refused a record; the rest were dropped.
    ConsumerCancelled { pushed: usize },
    /// The backend request was cancelled before any record was produced.
    Cancelled,
}

/// Runs one canned query against a [`StreamBackend`] and feeds the host.
pub struct SearchQuery<B: StreamBackend> {
    query: CannedQuery,
    backend: B,
}

impl<B: StreamBackend> SearchQuery<B> {
    pub fn new(query: CannedQuery, backend: B) -> Self {
        Self { query, backend }
    }

    pub fn query(&self) -> &CannedQuery {
        &self.query
    }

    /// Text actually sent to the backend.
    ///
    /// Surrounding whitespace is ignored. An empty query with no department
    /// selected searches [`DEFAULT_SEARCH_TERM`]. An empty query with a
    /// department selected uses the department id as the search term, since
    /// the search endpoint has no category filter.
    pub fn search_text(&self) -> &str {
        let text = self.query.query_string.trim();
        if !text.is_empty() {
            return text;
        }
        match self.query.department_id.as_deref().map(str::trim) {
            Some(department) if !department.is_empty() => department,
            _ => DEFAULT_SEARCH_TERM,
        }
    }

    pub fn run(&self, sink: &mut dyn ResultSink) -> Result<QueryOutcome> {
        let search_text = self.search_text();
        log::debug!("running stream search for {:?}", search_text);

        let streams = match self.backend.query_streams(search_text) {
            Ok(streams) => streams,
            Err(Error::Cancelled) => {
                log::info!("stream search for {:?} cancelled", search_text);
                return Ok(QueryOutcome::Cancelled);
            }
            Err(e) => {
                log::warn!("stream search for {:?} failed: {}", search_text, e);
                return Err(e);
            }
        };

        let mut pushed = 0;
        for stream in &streams {
            if !sink.push(stream) {
                return Ok(QueryOutcome::ConsumerCancelled { pushed });
            }
            pushed += 1;
        }
        Ok(QueryOutcome::Completed { pushed })
    }

    /// Register every department the backend knows, in backend order.
    pub fn register_departments(&self, registrar: &mut dyn DepartmentRegistrar) -> Result<usize> {
        let departments = self.backend.query_departments()?;
        for department in &departments {
            registrar.register_department(department);
        }
        Ok(departments.len())
    }

    /// Host notification that the query was abandoned.
    pub fn cancelled(&self) {
        self.backend.cancel();
    }
}
