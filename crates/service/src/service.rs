use std::sync::Arc;

use rpc::{JsonRpcClient, RpcTransport};

use crate::duties::{DutyStrategy, default_strategies};
use crate::error::ServiceError;
use crate::slot::{SlotClock, SystemSlotClock, current_slot, ensure_not_future};

/// Stateless resolver for per-slot questions against one upstream provider.
///
/// Cloning is cheap; clones share the RPC connection pool, the clock and the
/// sync duty strategy chain. Each resolution issues its RPC calls strictly one
/// after another; dropping the returned future abandons the remaining calls.
pub struct SlotService<T: RpcTransport> {
	pub(crate) rpc: JsonRpcClient<T>,
	pub(crate) strategies: Arc<Vec<Box<dyn DutyStrategy<T>>>>,
	clock: Arc<dyn SlotClock>,
	genesis_time: u64,
}

impl<T: RpcTransport> std::fmt::Debug for SlotService<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SlotService")
			.field("rpc", &self.rpc)
			.field("strategies", &self.strategies.len())
			.field("genesis_time", &self.genesis_time)
			.finish()
	}
}

impl<T: RpcTransport> Clone for SlotService<T> {
	fn clone(&self) -> Self {
		Self {
			rpc: self.rpc.clone(),
			strategies: Arc::clone(&self.strategies),
			clock: Arc::clone(&self.clock),
			genesis_time: self.genesis_time,
		}
	}
}

impl<T: RpcTransport> SlotService<T> {
	/// Service using the system clock, a genesis time of zero and the default
	/// sync committee strategy chain.
	pub fn new(rpc: JsonRpcClient<T>) -> Self {
		Self { rpc, strategies: Arc::new(default_strategies()), clock: Arc::new(SystemSlotClock), genesis_time: 0 }
	}

	pub fn with_clock(mut self, clock: impl SlotClock + 'static) -> Self {
		self.clock = Arc::new(clock);
		self
	}

	pub fn with_genesis_time(mut self, genesis_time: u64) -> Self {
		self.genesis_time = genesis_time;
		self
	}

	/// Replace the ordered chain tried before falling back to a synthetic committee
	pub fn with_strategies(mut self, strategies: Vec<Box<dyn DutyStrategy<T>>>) -> Self {
		self.strategies = Arc::new(strategies);
		self
	}

	pub fn rpc(&self) -> &JsonRpcClient<T> {
		&self.rpc
	}

	pub fn current_slot(&self) -> u64 {
		current_slot(self.clock.now_unix(), self.genesis_time)
	}

	/// Fails with [`ServiceError::FutureSlot`] for slots after the current one
	pub fn validate_slot(&self, slot: u64) -> Result<(), ServiceError> {
		ensure_not_future(slot, self.current_slot())
	}
}


#[cfg(test)]
mod tests {
	use super::test_utils::*;
	use super::*;

	#[test]
	fn test_current_slot_uses_clock_and_genesis() {
		let service = service(rpc::MockRpcTransport::new());
		assert_eq!(service.current_slot(), NOW / 12);

		let service = service.with_genesis_time(NOW - 120);
		assert_eq!(service.current_slot(), 10);
	}

	#[test]
	fn test_validate_slot() {
		let service = service(rpc::MockRpcTransport::new());
		let current = service.current_slot();

		assert!(service.validate_slot(4_700_000).is_ok());
		assert!(service.validate_slot(current).is_ok());
		assert!(matches!(
			service.validate_slot(current + 1_000),
			Err(ServiceError::FutureSlot { current_slot, .. }) if current_slot == current
		));
	}
}
