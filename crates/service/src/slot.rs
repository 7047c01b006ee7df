use crate::constants::{EPOCHS_PER_SYNC_COMMITTEE_PERIOD, SLOT_DURATION_SECONDS, SLOTS_PER_EPOCH};
use crate::error::ServiceError;

/// Source of wall-clock time for the future-slot check
pub trait SlotClock: Send + Sync {
	/// Seconds since the unix epoch
	fn now_unix(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSlotClock;

impl SlotClock for SystemSlotClock {
	fn now_unix(&self) -> u64 {
		common::utils::unix_now()
	}
}

/// Converts a slot number to its corresponding epoch.
pub fn slot_to_epoch(slot: u64) -> u64 {
	slot / SLOTS_PER_EPOCH
}

/// Sync committee period an epoch belongs to.
pub fn epoch_to_sync_period(epoch: u64) -> u64 {
	epoch / EPOCHS_PER_SYNC_COMMITTEE_PERIOD
}

/// Sync committee period a slot belongs to, i.e. `slot / 8192`.
pub fn slot_to_sync_period(slot: u64) -> u64 {
	epoch_to_sync_period(slot_to_epoch(slot))
}

/// Slot in progress at `now_unix` for a chain that started at `genesis_time`.
///
/// With a genesis time of zero this is simply `now_unix / 12`. Returns `0` if
/// `now_unix` is before genesis.
pub fn current_slot(now_unix: u64, genesis_time: u64) -> u64 {
	now_unix.saturating_sub(genesis_time) / SLOT_DURATION_SECONDS
}

/// Reject slots after `current_slot`. The current slot itself is accepted.
pub fn ensure_not_future(slot: u64, current_slot: u64) -> Result<(), ServiceError> {
	if slot > current_slot {
		return Err(ServiceError::FutureSlot { slot, current_slot });
	}
	Ok(())
}
