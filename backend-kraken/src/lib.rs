#![allow(clippy::module_inception)]
mod backend;
mod client;

pub use client::{structs, HttpClient, HttpRequest, HttpResponse, KrakenClient};

#[cfg(feature = "ureq-client")]
pub use client::UreqClient;
#[cfg(feature = "reqwest-client")]
pub use client::ReqwestClient;

// Re-export core types for convenience
pub use livescope_core::{
    CancellationFlag, Config, DepartmentList, Error, Next, Progress, QueryParameters, Result,
    StreamBackend, StreamList, StreamRecord,
};
