use serde::{Deserialize, Serialize};
use service::{BlockReward, BlockStatus, SyncDutySet};

/// Body of `GET /blockreward/{slot}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRewardResponse {
	pub status: BlockStatus,
	/// GWEI
	pub reward: i64,
	pub block_info: BlockInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
	pub proposer_payment: i64,
	pub is_mev_boost: bool,
	/// `reward` is a placeholder, not a value computed from the block
	pub estimated: bool,
}

impl From<BlockReward> for BlockRewardResponse {
	fn from(reward: BlockReward) -> Self {
		let gwei = i64::try_from(reward.reward_gwei).unwrap_or(i64::MAX);
		Self {
			status: reward.status,
			reward: gwei,
			block_info: BlockInfo {
				proposer_payment: gwei,
				is_mev_boost: reward.status.is_mev(),
				estimated: reward.estimated,
			},
		}
	}
}

/// Body of `GET /syncduties/{slot}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncDutiesResponse {
	pub validators: Vec<String>,
	pub sync_info: SyncInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncInfo {
	pub sync_period: i64,
	pub committee_size: usize,
	/// Keys come from the bundled table rather than the chain
	pub synthetic: bool,
}

impl From<SyncDutySet> for SyncDutiesResponse {
	fn from(duties: SyncDutySet) -> Self {
		let synthetic = duties.is_synthetic();
		Self {
			sync_info: SyncInfo {
				sync_period: i64::try_from(duties.sync_period).unwrap_or(i64::MAX),
				committee_size: duties.committee_size,
				synthetic,
			},
			validators: duties.validators,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
}

#[cfg(test)]
mod tests {
	use alloy::primitives::U256;
	use serde_json::json;
	use service::DutySource;

	use super::*;

	#[test]
	fn test_block_reward_body() {
		let reward = BlockReward { status: BlockStatus::Mev, reward_gwei: U256::from(45_000), estimated: false };
		let body = serde_json::to_value(BlockRewardResponse::from(reward)).unwrap();
		assert_eq!(
			body,
			json!({
				"status": "mev",
				"reward": 45_000,
				"block_info": { "proposer_payment": 45_000, "is_mev_boost": true, "estimated": false }
			})
		);
	}

	#[test]
	fn test_oversized_reward_saturates() {
		let reward = BlockReward { status: BlockStatus::Vanilla, reward_gwei: U256::MAX, estimated: false };
		let body = BlockRewardResponse::from(reward);
		assert_eq!(body.reward, i64::MAX);
		assert!(!body.block_info.is_mev_boost);
	}

	#[test]
	fn test_sync_duties_body() {
		let duties = SyncDutySet::new(vec![format!("0x{:096x}", 1)], 146_875, 573, DutySource::Synthetic);
		let body = serde_json::to_value(SyncDutiesResponse::from(duties)).unwrap();
		assert_eq!(
			body,
			json!({
				"validators": [format!("0x{:096x}", 1)],
				"sync_info": { "sync_period": 573, "committee_size": 1, "synthetic": true }
			})
		);
	}
}
