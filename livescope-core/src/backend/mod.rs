mod backend;
mod structs;

pub use backend::StreamBackend;
pub use structs::{DepartmentList, QueryParameters, StreamList, StreamRecord};
