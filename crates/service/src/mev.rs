//! Best-effort MEV-Boost detection from a block's `extraData` and size.
//!
//! This is a heuristic, not proof: builders are free to write anything into
//! `extraData`, and large vanilla blocks exist. Misclassification is expected.

use alloy::hex;

use crate::constants::{MEV_BUILDER_TAGS, MEV_TRANSACTION_THRESHOLD};
use crate::types::BlockStatus;

/// Classify a block from its hex `extraData` and transaction count.
///
/// Rules, in order:
/// 1. empty `extraData` (`""` or `"0x"`) is vanilla
/// 2. a known builder tag in the raw or decoded `extraData` is MEV
/// 3. more than [`MEV_TRANSACTION_THRESHOLD`] transactions is MEV
/// 4. anything else is vanilla
pub fn classify_block(extra_data: &str, transaction_count: usize) -> BlockStatus {
	let extra_data = extra_data.trim();
	if extra_data.is_empty() || extra_data.eq_ignore_ascii_case("0x") {
		return BlockStatus::Vanilla;
	}

	if has_builder_tag(extra_data) {
		return BlockStatus::Mev;
	}

	if transaction_count > MEV_TRANSACTION_THRESHOLD {
		return BlockStatus::Mev;
	}

	BlockStatus::Vanilla
}

/// Case-insensitive match of [`MEV_BUILDER_TAGS`] against the raw field and,
/// when it is hex, against its UTF-8 decoding.
pub fn has_builder_tag(extra_data: &str) -> bool {
	let raw = extra_data.to_lowercase();
	let decoded = hex::decode(extra_data).map(|bytes| String::from_utf8_lossy(&bytes).to_lowercase()).unwrap_or_default();

	MEV_BUILDER_TAGS.iter().any(|tag| raw.contains(tag) || decoded.contains(tag))
}
