#![allow(clippy::module_inception)]
mod backend;
pub mod config;
pub mod constants;
pub mod error;
mod host;
mod progress;
mod query;

pub use backend::*;
pub use config::Config;
pub use error::{Error, Result};
pub use host::{DepartmentRegistrar, ResultSink};
pub use progress::{CancellationFlag, Next, Progress};
pub use query::{CannedQuery, QueryOutcome, SearchQuery};
