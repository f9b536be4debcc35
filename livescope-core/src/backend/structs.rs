use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One live broadcast returned by a stream search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRecord {
    pub title: String,
    pub game: String,
    pub channel_name: String,
    pub viewer_count: String,
    pub url: String,
    pub logo_url: String,
    pub thumbnail_url: String,
}

/// Streams in the order the service returned them.
pub type StreamList = Vec<StreamRecord>;

pub type DepartmentList = Vec<String>;

/// Query string parameters, encoded in key order.
pub type QueryParameters = BTreeMap<String, String>;
