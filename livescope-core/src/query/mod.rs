mod query;

pub use query::{CannedQuery, QueryOutcome, SearchQuery};
