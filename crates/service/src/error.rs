use rpc::RpcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("requested slot {slot} is in the future (current slot: {current_slot})")]
	FutureSlot { slot: u64, current_slot: u64 },

	#[error("slot {slot} does not exist")]
	SlotNotFound { slot: u64 },

	#[error("RPC request failed: {0}")]
	Rpc(#[from] RpcError),
}
