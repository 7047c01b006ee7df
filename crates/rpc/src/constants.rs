pub const JSONRPC_VERSION: &str = "2.0";

pub const GET_BLOCK_BY_NUMBER: &str = "eth_getBlockByNumber";

pub const GET_BLOCK_BY_HASH: &str = "eth_getBlockByHash";

pub const SYNCING: &str = "eth_syncing";

pub const GET_STATE_SYNC_COMMITTEES: &str = "beacon_get_state_sync_committees";

pub const GET_VALIDATORS: &str = "beacon_get_validators";

/// Body marker the provider returns instead of a JSON-RPC error when throttling
pub const RATE_LIMIT_MARKER: &str = "request limit reached";

/// Upstream error message for a block the node does not know (compared case-insensitively)
pub const UNKNOWN_BLOCK_MESSAGE: &str = "unknown block";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default delay before every outbound call, matching a one-request-per-second limit
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1_000;

/// Default wait after a rate-limited response, doubled on every further attempt
pub const DEFAULT_RATE_LIMIT_BACKOFF_MS: u64 = 2_000;

/// Default number of re-issues of a single call after rate-limited responses
pub const DEFAULT_MAX_RATE_LIMIT_RETRIES: u32 = 5;

/// Upper bound for a single rate-limit backoff
pub const MAX_RATE_LIMIT_BACKOFF_MS: u64 = 30_000;
