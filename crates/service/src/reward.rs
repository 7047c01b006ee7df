use alloy::primitives::U256;
use rpc::types::{ExecutionBlock, RpcTransaction, parse_quantity};
use rpc::RpcTransport;
use tracing::{debug, info, warn};

use crate::error::ServiceError;
use crate::mev::classify_block;
use crate::service::SlotService;
use crate::types::BlockReward;

/// Per-gas tip paid to the proposer.
///
/// Uses `maxPriorityFeePerGas` when the transaction carries one, otherwise
/// `gasPrice - baseFee` clamped at zero.
pub fn priority_fee(tx: &RpcTransaction, base_fee: U256) -> Option<U256> {
	if let Some(tip) = tx.max_priority_fee_per_gas.as_deref().filter(|tip| !tip.is_empty()) {
		return parse_quantity(tip);
	}
	let gas_price = parse_quantity(tx.gas_price.as_deref()?)?;
	Some(gas_price.saturating_sub(base_fee))
}

/// Gas charged for the transaction; the gas limit stands in when the provider
/// does not inline `gasUsed`.
pub fn gas_consumed(tx: &RpcTransaction) -> Option<U256> {
	tx.gas_used.as_deref().and_then(parse_quantity).or_else(|| tx.gas.as_deref().and_then(parse_quantity))
}

pub fn transaction_reward(tx: &RpcTransaction, base_fee: U256) -> Option<U256> {
	Some(priority_fee(tx, base_fee)?.saturating_mul(gas_consumed(tx)?))
}

/// Sum of priority fees in wei over every full transaction of `block`.
///
/// Transactions given only by hash, or missing the fields needed for the
/// computation, are skipped.
pub fn aggregate_reward_wei(block: &ExecutionBlock) -> U256 {
	let base_fee = block.base_fee().unwrap_or_else(|| {
		if let Some(raw) = block.base_fee_per_gas.as_deref() {
			warn!(base_fee = raw, "Unparseable base fee, treating as zero");
		}
		U256::ZERO
	});

	let mut skipped = 0usize;
	let total = block.transactions.iter().fold(U256::ZERO, |total, tx| {
		match tx.as_full().and_then(|tx| transaction_reward(tx, base_fee)) {
			Some(reward) => total.saturating_add(reward),
			None => {
				skipped += 1;
				total
			}
		}
	});

	if skipped > 0 {
		warn!(skipped, transactions = block.transactions.len(), "Skipped transactions without usable fee data");
	}
	total
}

impl<T: RpcTransport> SlotService<T> {
	/// Resolve the proposer reward and MEV status of `slot`.
	pub async fn block_reward(&self, slot: u64) -> Result<BlockReward, ServiceError> {
		self.validate_slot(slot)?;

		let block = match self.rpc.get_block_by_number(slot, true).await {
			Ok(Some(block)) => block,
			Ok(None) => return Err(ServiceError::SlotNotFound { slot }),
			Err(err) if err.is_unknown_block() => return Err(ServiceError::SlotNotFound { slot }),
			Err(err) => return Err(err.into()),
		};

		let status = classify_block(block.extra_data(), block.transactions.len());
		let Some(hash) = block.block_hash() else {
			debug!(slot, "Block has no execution payload hash");
			return Ok(BlockReward::without_payload());
		};

		let reward = match self.rpc.get_block_by_hash(hash, true).await {
			Ok(Some(execution)) => BlockReward::from_wei(status, aggregate_reward_wei(&execution)),
			Ok(None) => {
				warn!(slot, hash, "Execution block not found, reporting placeholder reward");
				BlockReward::unavailable(status)
			}
			Err(err) => {
				warn!(slot, hash, err = %err, "Failed to fetch execution block, reporting placeholder reward");
				BlockReward::unavailable(status)
			}
		};

		info!(slot, status = %reward.status, reward_gwei = %reward.reward_gwei, estimated = reward.estimated, "Resolved block reward");
		Ok(reward)
	}
}
