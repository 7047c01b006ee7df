//! Slot-level resolution of block rewards, MEV-Boost classification and sync
//! committee duties on top of the upstream JSON-RPC provider.

pub mod constants;
pub mod duties;
pub mod error;
pub mod mev;
pub mod reward;
pub mod service;
pub mod slot;
pub mod types;

pub use error::ServiceError;
pub use service::SlotService;
pub use types::{BlockReward, BlockStatus, DutySource, SyncDutySet};
