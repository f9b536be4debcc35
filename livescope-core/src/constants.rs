/// Root of every Kraken API request URL.
pub const DEFAULT_API_ROOT: &str = "https://api.twitch.tv/kraken/";

pub const DEFAULT_USER_AGENT: &str = "livestreamer-scope 0.1; (foo)";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Searched when the user submits an empty query and picked no department.
pub const DEFAULT_SEARCH_TERM: &str = "development";

/// Number of streams requested per search.
pub const STREAM_SEARCH_LIMIT: u32 = 10;

/// Value of the top-level `status` field on a successful API reply.
pub const API_STATUS_OK: u16 = 200;
