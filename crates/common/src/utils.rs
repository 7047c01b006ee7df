use std::time::{SystemTime, UNIX_EPOCH};

use alloy::hex;
use alloy::rpc::types::beacon::BlsPublicKey;
use eyre::Result;
use tracing::debug;

/// Length of a compressed BLS12-381 public key in bytes.
pub const BLS_PUBKEY_LEN: usize = 48;

/// Decode a `0x`-prefixed, 48-byte BLS public key.
pub fn decode_pubkey(public_key: &str) -> Result<BlsPublicKey> {
	let stripped = public_key
		.strip_prefix("0x")
		.ok_or_else(|| eyre::eyre!("BLS public key must be 0x-prefixed: {}", public_key))?;
	let bytes = hex::decode(stripped)?;
	let bytes: [u8; BLS_PUBKEY_LEN] = bytes
		.try_into()
		.map_err(|b: Vec<u8>| eyre::eyre!("Invalid BLS public key length: expected 48 bytes, got {}", b.len()))?;
	Ok(BlsPublicKey::new(bytes))
}

/// Whether `public_key` is `0x` followed by exactly 96 hex characters.
pub fn is_bls_pubkey_hex(public_key: &str) -> bool {
	decode_pubkey(public_key).is_ok()
}

/// Seconds since the unix epoch; a clock set before 1970 reads as zero.
pub fn unix_now() -> u64 {
	SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
}

#[cfg(unix)]
pub async fn wait_for_signal() -> Result<()> {
	use tokio::{
		select,
		signal::unix::{SignalKind, signal},
	};

	let mut sigint = signal(SignalKind::interrupt())?;
	let mut sigterm = signal(SignalKind::terminate())?;

	select! {
		_ = sigint.recv() => debug!("Received SIGINT"),
		_ = sigterm.recv() => debug!("Received SIGTERM"),
	}

	Ok(())
}

#[cfg(windows)]
pub async fn wait_for_signal() -> Result<()> {
	tokio::signal::ctrl_c().await?;
	debug!("Received Ctrl-C");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	const PUBKEY: &str =
		"0xa1d1ad0714035353258038e964ae9675dc0252ee24daffcb82688956ebf71d0de0fc5450436cfb148eb867acb2bdf44d";

	#[test]
	fn test_decode_pubkey_valid() {
		let pubkey = decode_pubkey(PUBKEY).unwrap();
		assert_eq!(pubkey.len(), BLS_PUBKEY_LEN);
		assert_eq!(format!("{pubkey}"), PUBKEY);
	}

	#[test]
	fn test_decode_pubkey_requires_prefix() {
		assert!(decode_pubkey(PUBKEY.strip_prefix("0x").unwrap()).is_err());
	}

	#[test]
	fn test_decode_pubkey_invalid_hex() {
		assert!(decode_pubkey("0xzzzz").is_err());
	}

	#[test]
	fn test_decode_pubkey_wrong_length() {
		// 32 bytes
		let short = "0xa0b0c0d0e0f0a1b1c1d1e1f1a2b2c2d2e2f2a3b3c3d3e3f3a4b4c4d4e4f4a5b5";
		assert!(decode_pubkey(short).is_err());
		assert!(!is_bls_pubkey_hex(short));
	}

	#[test]
	fn test_is_bls_pubkey_hex() {
		assert!(is_bls_pubkey_hex(PUBKEY));
		assert!(!is_bls_pubkey_hex(""));
		assert!(!is_bls_pubkey_hex("0x123"));
	}

	#[test]
	fn test_unix_now_is_after_merge() {
		// 2022-09-15, the first post-merge day
		assert!(unix_now() > 1_663_200_000);
	}
}
