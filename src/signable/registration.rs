//! Registration hash
//!
//! Registrations are not Pedersen hashed: the hash is a Keccak digest of the packed
//! prefix, Ethereum address and STARK key, reduced modulo a fixed prime.

use crate::constants::{REGISTRATION_HASH_MODULUS, REGISTRATION_PREFIX};
use crate::crypto::keccak256_concat;
use crate::errors::{StarkExError, StarkExResult};
use crate::types::StarkwareRegistration;
use crate::utils::felt::{biguint_to_bytes32, hex_to_fixed_bytes, strip_hex_prefix};
use num_bigint::BigUint;
use starknet_types_core::felt::Felt;

/// Solidity `address`: exactly 20 bytes, no padding of shorter input
fn eth_address_bytes(eth_key: &str) -> StarkExResult<[u8; 20]> {
    let digits = strip_hex_prefix(eth_key.trim());
    if digits.len() != 40 {
        return Err(StarkExError::invalid_params(format!(
            "ethKey: expected 40 hex digits, got {}",
            digits.len()
        )));
    }
    hex_to_fixed_bytes::<20>("ethKey", digits)
}

impl StarkwareRegistration {
    pub fn new(eth_key: impl Into<String>, stark_key: impl Into<String>) -> Self {
        Self {
            eth_key: eth_key.into(),
            stark_key: stark_key.into(),
        }
    }

    /// `keccak256("UserRegistration:" ‖ address ‖ uint256(starkKey)) mod K`
    pub(crate) fn registration_hash(&self) -> StarkExResult<Felt> {
        let eth_key = eth_address_bytes(&self.eth_key)?;
        let stark_key = hex_to_fixed_bytes::<32>("starkKey", &self.stark_key)?;

        let digest = keccak256_concat(&[REGISTRATION_PREFIX.as_bytes(), &eth_key, &stark_key]);
        let modulus = BigUint::from_bytes_be(&REGISTRATION_HASH_MODULUS);
        let reduced = BigUint::from_bytes_be(&digest) % modulus;

        Ok(Felt::from_bytes_be(&biguint_to_bytes32("registrationHash", &reduced)?))
    }
}
