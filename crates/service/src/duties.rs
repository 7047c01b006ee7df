use async_trait::async_trait;
use common::utils::is_bls_pubkey_hex;
use rpc::{JsonRpcClient, RpcError, RpcTransport};
use tracing::{debug, info, warn};

use crate::constants::SYNTHETIC_VALIDATOR_PUBKEYS;
use crate::error::ServiceError;
use crate::service::SlotService;
use crate::slot::{slot_to_epoch, slot_to_sync_period};
use crate::types::{DutySource, SyncDutySet};

/// Coordinates a sync duty lookup is addressed by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyTarget {
	pub slot: u64,
	pub epoch: u64,
	pub sync_period: u64,
}

impl DutyTarget {
	pub fn for_slot(slot: u64) -> Self {
		Self { slot, epoch: slot_to_epoch(slot), sync_period: slot_to_sync_period(slot) }
	}
}

/// One way of asking the upstream provider for the committee of a slot.
///
/// `Ok(None)` means the provider answered but nothing usable came back, so the
/// next strategy should be tried.
#[async_trait]
pub trait DutyStrategy<T: RpcTransport>: Send + Sync {
	fn source(&self) -> DutySource;

	async fn attempt(&self, rpc: &JsonRpcClient<T>, target: &DutyTarget) -> Result<Option<Vec<String>>, RpcError>;
}

/// `beacon_get_state_sync_committees` for the slot's epoch and period
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncCommitteeStrategy;

#[async_trait]
impl<T: RpcTransport> DutyStrategy<T> for SyncCommitteeStrategy {
	fn source(&self) -> DutySource {
		DutySource::SyncCommittee
	}

	async fn attempt(&self, rpc: &JsonRpcClient<T>, target: &DutyTarget) -> Result<Option<Vec<String>>, RpcError> {
		let committee = rpc.get_state_sync_committees(target.epoch, target.sync_period).await?;
		Ok(committee.and_then(|committee| usable_keys(committee.data.validators)))
	}
}

/// `beacon_get_validators` for the slot's epoch, used when no committee endpoint exists
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorListStrategy;

#[async_trait]
impl<T: RpcTransport> DutyStrategy<T> for ValidatorListStrategy {
	fn source(&self) -> DutySource {
		DutySource::ValidatorList
	}

	async fn attempt(&self, rpc: &JsonRpcClient<T>, target: &DutyTarget) -> Result<Option<Vec<String>>, RpcError> {
		let validators = rpc.get_validators(target.epoch).await?;
		Ok(validators.and_then(|list| usable_keys(list.data.into_iter().map(|entry| entry.validator.pubkey))))
	}
}

pub fn default_strategies<T: RpcTransport>() -> Vec<Box<dyn DutyStrategy<T>>> {
	vec![Box::new(SyncCommitteeStrategy), Box::new(ValidatorListStrategy)]
}

/// Keeps well-formed BLS keys; `None` if none survive.
pub fn usable_keys(keys: impl IntoIterator<Item = String>) -> Option<Vec<String>> {
	let keys: Vec<String> = keys.into_iter().filter(|key| is_bls_pubkey_hex(key)).collect();
	(!keys.is_empty()).then_some(keys)
}

/// Deterministic stand-in committee built from the bundled key table.
///
/// Returns between 8 and 23 keys; the same slot always yields the same list and
/// entries may repeat.
pub fn synthetic_committee(slot: u64, epoch: u64) -> Vec<String> {
	let table = SYNTHETIC_VALIDATOR_PUBKEYS.len() as u128;
	let seed = (slot as u128 * 1_000 + epoch as u128 * 2_000) % 1_000_000;
	let count = (8 + seed % 16).min(table);

	(0..count).map(|i| SYNTHETIC_VALIDATOR_PUBKEYS[((seed + i * i) % table) as usize].to_string()).collect()
}

impl<T: RpcTransport> SlotService<T> {
	/// Resolve the validators on sync committee duty at `slot`.
	///
	/// Upstream strategies are tried in order; if none yields a usable key the
	/// synthetic committee is returned. Only transport level failures (including
	/// an exhausted rate-limit budget) abort the resolution.
	pub async fn sync_duties(&self, slot: u64) -> Result<SyncDutySet, ServiceError> {
		self.validate_slot(slot)?;
		let target = DutyTarget::for_slot(slot);

		self.check_upstream(&target).await?;

		for strategy in self.strategies.iter() {
			let source = strategy.source();
			match strategy.attempt(&self.rpc, &target).await {
				Ok(Some(keys)) => {
					info!(slot, ?source, keys = keys.len(), "Resolved sync duties");
					return Ok(SyncDutySet::new(keys, target.epoch, target.sync_period, source));
				}
				Ok(None) => debug!(slot, ?source, "Strategy returned no usable keys"),
				Err(err) if err.is_transport() => return Err(err.into()),
				Err(err) => debug!(slot, ?source, err = %err, "Strategy failed"),
			}
		}

		warn!(slot, epoch = target.epoch, "No upstream sync committee data, using synthetic committee");
		Ok(SyncDutySet::new(
			synthetic_committee(slot, target.epoch),
			target.epoch,
			target.sync_period,
			DutySource::Synthetic,
		))
	}

	/// Block existence and sync status checks ahead of the committee queries.
	/// Their answers are informational; only transport failures are returned.
	async fn check_upstream(&self, target: &DutyTarget) -> Result<(), RpcError> {
		match self.rpc.get_block_by_number(target.slot, false).await {
			Ok(Some(_)) => debug!(slot = target.slot, "Block present"),
			Ok(None) => debug!(slot = target.slot, "No block at slot"),
			Err(err) if err.is_transport() => return Err(err),
			Err(err) => debug!(slot = target.slot, err = %err, "Block lookup failed"),
		}

		match self.rpc.syncing().await {
			Ok(status) => debug!(slot = target.slot, syncing = ?status, "Upstream sync status"),
			Err(err) if err.is_transport() => return Err(err),
			Err(err) => debug!(slot = target.slot, err = %err, "Sync status lookup failed"),
		}

		Ok(())
	}
}
