/// Health check endpoint
pub const HEALTH: &str = "/health";

/// Prometheus exposition endpoint
pub const METRICS: &str = "/metrics";

/// Proposer reward and MEV-Boost status of a slot
pub const BLOCK_REWARD: &str = "/blockreward/{slot}";

/// Sync committee members on duty at a slot
pub const SYNC_DUTIES: &str = "/syncduties/{slot}";
