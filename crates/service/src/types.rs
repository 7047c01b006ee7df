use std::fmt;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::constants::{
	MAX_DISPLAYED_SYNC_COMMITTEE, UNAVAILABLE_REWARD_PLACEHOLDER_GWEI, WEI_PER_GWEI, ZERO_REWARD_PLACEHOLDER_GWEI,
};

/// How a block was built, as far as the heuristic can tell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStatus {
	Mev,
	Vanilla,
}

impl BlockStatus {
	pub fn is_mev(self) -> bool {
		self == Self::Mev
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Mev => "mev",
			Self::Vanilla => "vanilla",
		}
	}
}

impl fmt::Display for BlockStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Reward paid to the proposer of one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReward {
	pub status: BlockStatus,
	/// Priority fees in GWEI
	pub reward_gwei: U256,
	/// Set when `reward_gwei` is a placeholder rather than a computed value
	pub estimated: bool,
}

impl BlockReward {
	/// Converts a computed wei total, substituting the zero placeholder when the
	/// total rounds down to zero GWEI.
	pub fn from_wei(status: BlockStatus, total_wei: U256) -> Self {
		let reward_gwei = total_wei / U256::from(WEI_PER_GWEI);
		if reward_gwei.is_zero() {
			return Self { status, reward_gwei: U256::from(ZERO_REWARD_PLACEHOLDER_GWEI), estimated: true };
		}
		Self { status, reward_gwei, estimated: false }
	}

	/// Placeholder for a classified block whose execution data could not be fetched
	pub fn unavailable(status: BlockStatus) -> Self {
		Self { status, reward_gwei: U256::from(UNAVAILABLE_REWARD_PLACEHOLDER_GWEI), estimated: true }
	}

	/// A slot whose block carries no execution payload hash
	pub fn without_payload() -> Self {
		Self { status: BlockStatus::Vanilla, reward_gwei: U256::ZERO, estimated: false }
	}
}

/// Where a set of sync duties came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DutySource {
	SyncCommittee,
	ValidatorList,
	Synthetic,
}

/// Validator public keys on sync committee duty for one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncDutySet {
	/// `0x`-prefixed BLS public keys, at most 32
	pub validators: Vec<String>,
	pub epoch: u64,
	pub sync_period: u64,
	/// Number of keys actually returned
	pub committee_size: usize,
	pub source: DutySource,
}

impl SyncDutySet {
	/// Builds the set, truncating `validators` to the display cap.
	pub fn new(mut validators: Vec<String>, epoch: u64, sync_period: u64, source: DutySource) -> Self {
		validators.truncate(MAX_DISPLAYED_SYNC_COMMITTEE);
		let committee_size = validators.len();
		Self { validators, epoch, sync_period, committee_size, source }
	}

	pub fn is_synthetic(&self) -> bool {
		self.source == DutySource::Synthetic
	}
}
